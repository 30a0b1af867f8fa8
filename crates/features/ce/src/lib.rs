//! Cloud Cost Management module.

use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::bootstrap::{ModuleDescriptor, Registrar};
use orbit_kernel::factory::{DashboardContext, ModuleSelection};
use orbit_kernel::route::{RouteEntry, RouteTable};
use orbit_kernel::rsql::{self, Rsql, RsqlError};
use orbit_kernel::view::{PageContext, View};

pub const MODULE: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Ce, required_flags: FeatureFlags::empty(), register };

#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::for_module(ModuleName::Ce)
        .with(
            "ce-home",
            RouteEntry::builder()
                .path("/account/:accountId/ce/overview")
                .title("Cloud Costs")
                .page_id("ce-overview")
                .page(overview)
                .build(),
        )
        .with(
            "ce-perspective",
            RouteEntry::builder()
                .path("/account/:accountId/ce/perspectives/:perspectiveId/name/:perspectiveName")
                .title("Perspective")
                .page_id("ce-perspective")
                .page(perspective)
                .build(),
        )
        .with(
            "ce-budgets",
            RouteEntry::builder()
                .path("/account/:accountId/ce/budgets")
                .title("Budgets")
                .page_id("ce-budgets")
                .page(budgets)
                .build(),
        )
        .with(
            "ce-autostopping",
            RouteEntry::builder()
                .path("/account/:accountId/ce/autostopping-rules")
                .title("AutoStopping Rules")
                .page_id("ce-autostopping")
                .page(autostopping)
                .flags(FeatureFlags::CCM_AUTOSTOPPING)
                .build(),
        )
}

/// Cost filter for a spend window, in whole currency units.
///
/// # Errors
/// Returns [`RsqlError`] if `provider` contains a reserved RSQL character.
pub fn spend_filter(provider: &str, min: u64, max: u64) -> Result<Rsql, RsqlError> {
    rsql::and([rsql::equals("cloudProvider", provider)?, rsql::ge("cost", min)?, rsql::lt("cost", max)?])
}

fn register(registrar: &mut Registrar<'_>) {
    registrar.routes(routes()).landing(landing).selection(ModuleSelection {
        label: "Cloud Costs".into(),
        description: "Track and reduce cloud spend".into(),
        icon: "ce-main".into(),
        route: "ce-home".into(),
    });
    tracing::debug!("CE module registered");
}

fn landing(ctx: &DashboardContext<'_>) -> View {
    let view = View::new("Cloud cost overview").line(format!("account: {}", ctx.account_id));
    match spend_filter("AWS", 1_000, 10_000) {
        Ok(filter) => view.line(format!("top spend: filter={filter}")),
        Err(err) => view.line(format!("filter unavailable: {err}")),
    }
}

fn overview(_: &PageContext<'_>) -> View {
    View::new("Cloud Costs").line("Spend by provider for the last 30 days")
}

fn perspective(ctx: &PageContext<'_>) -> View {
    View::new(format!("Perspective {}", ctx.param("perspectiveName"))).line(format!("id: {}", ctx.param("perspectiveId")))
}

fn budgets(_: &PageContext<'_>) -> View {
    View::new("Budgets")
}

fn autostopping(ctx: &PageContext<'_>) -> View {
    let enabled = ctx.state.feature_flags.contains(FeatureFlags::CCM_AUTOSTOPPING);
    View::new("AutoStopping Rules").line(format!("enabled: {enabled}"))
}
