//! Feature Flags module.

use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::bootstrap::{ModuleDescriptor, Registrar};
use orbit_kernel::factory::{DashboardContext, ModuleSelection};
use orbit_kernel::route::{RouteEntry, RouteTable};
use orbit_kernel::rsql::{self, Rsql, RsqlError};
use orbit_kernel::view::{PageContext, View};

pub const MODULE: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Cf, required_flags: FeatureFlags::empty(), register };

const PROJECT: &str = "/account/:accountId/cf/orgs/:orgIdentifier/projects/:projectIdentifier";

#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::for_module(ModuleName::Cf)
        .with(
            "cf-home",
            RouteEntry::builder()
                .path("/account/:accountId/cf/home")
                .title("Feature Flags")
                .page_id("cf-home")
                .page(home)
                .build(),
        )
        .with(
            "cf-flags",
            RouteEntry::builder()
                .path(format!("{PROJECT}/feature-flags"))
                .title("Feature Flags")
                .page_id("cf-flags")
                .page(flags)
                .build(),
        )
        .with(
            "cf-flag",
            RouteEntry::builder()
                .path(format!("{PROJECT}/feature-flags/:featureFlagIdentifier"))
                .title("Feature Flag")
                .page_id("cf-flag")
                .page(flag)
                .build(),
        )
        .with(
            "cf-targets",
            RouteEntry::builder()
                .path(format!("{PROJECT}/target-management/targets"))
                .title("Targets")
                .page_id("cf-targets")
                .page(targets)
                .flags(FeatureFlags::FF_TARGETS)
                .build(),
        )
}

/// Flags not in `archived` that belong to `environment`.
///
/// # Errors
/// Returns [`RsqlError`] for an empty archive list or a reserved character in any operand.
pub fn active_flags_filter<'a, I>(environment: &str, archived: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator<Item = &'a str>,
{
    rsql::and([rsql::equals("environment", environment)?, rsql::excludes("identifier", archived)?])
}

fn register(registrar: &mut Registrar<'_>) {
    registrar.routes(routes()).landing(landing).selection(ModuleSelection {
        label: "Feature Flags".into(),
        description: "Release features safely".into(),
        icon: "cf-main".into(),
        route: "cf-home".into(),
    });
    tracing::debug!("CF module registered");
}

fn landing(ctx: &DashboardContext<'_>) -> View {
    View::new("Feature flag overview")
        .line(format!("account: {}", ctx.account_id))
        .line(format!("edition: {}", ctx.state.license.edition))
}

fn home(_: &PageContext<'_>) -> View {
    View::new("Feature Flags").line("Flag changes in the last 7 days")
}

fn flags(ctx: &PageContext<'_>) -> View {
    View::new(format!("Flags in {}", ctx.param("projectIdentifier")))
}

fn flag(ctx: &PageContext<'_>) -> View {
    let tab = ctx.query.get("activeEnvironment").map_or("all environments", String::as_str);
    View::new(format!("Flag {}", ctx.param("featureFlagIdentifier"))).line(format!("environment: {tab}"))
}

fn targets(_: &PageContext<'_>) -> View {
    View::new("Targets")
}
