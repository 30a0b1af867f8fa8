//! Continuous Integration module.

use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::bootstrap::{ModuleDescriptor, Registrar};
use orbit_kernel::factory::{DashboardContext, ModuleSelection};
use orbit_kernel::route::{RouteEntry, RouteTable};
use orbit_kernel::view::{PageContext, View};

pub const MODULE: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Ci, required_flags: FeatureFlags::empty(), register };

const PROJECT: &str = "/account/:accountId/ci/orgs/:orgIdentifier/projects/:projectIdentifier";

#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::for_module(ModuleName::Ci)
        .with(
            "ci-home",
            RouteEntry::builder()
                .path("/account/:accountId/ci/home")
                .title("Builds")
                .page_id("ci-home")
                .page(home)
                .build(),
        )
        .with(
            "ci-builds",
            RouteEntry::builder()
                .path(format!("{PROJECT}/builds"))
                .title("Builds")
                .page_id("ci-builds")
                .page(builds)
                .build(),
        )
        .with(
            "ci-build",
            RouteEntry::builder()
                .path(format!("{PROJECT}/builds/:buildIdentifier"))
                .title("Build")
                .page_id("ci-build")
                .page(build)
                .build(),
        )
        .with(
            "ci-getting-started",
            RouteEntry::builder()
                .path(format!("{PROJECT}/get-started"))
                .title("Get Started")
                .page_id("ci-getting-started")
                .page(getting_started)
                .build(),
        )
}

fn register(registrar: &mut Registrar<'_>) {
    registrar.routes(routes()).landing(landing).selection(ModuleSelection {
        label: "Builds".into(),
        description: "Build and test code".into(),
        icon: "ci-main".into(),
        route: "ci-home".into(),
    });
    tracing::debug!("CI module registered");
}

fn landing(ctx: &DashboardContext<'_>) -> View {
    View::new("Builds overview").line(format!("account: {}", ctx.account_id))
}

fn home(_: &PageContext<'_>) -> View {
    View::new("Builds").line("Build health across projects")
}

fn builds(ctx: &PageContext<'_>) -> View {
    let branch = ctx.query.get("branch").map_or("all branches", String::as_str);
    View::new(format!("Builds in {}", ctx.param("projectIdentifier"))).line(format!("branch: {branch}"))
}

fn build(ctx: &PageContext<'_>) -> View {
    View::new(format!("Build #{}", ctx.param("buildIdentifier")))
}

fn getting_started(_: &PageContext<'_>) -> View {
    View::new("Get Started").line("Connect a repository to create your first pipeline")
}
