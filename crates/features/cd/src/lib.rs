//! Continuous Delivery module.

mod dashboard;
mod pages;

use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::bootstrap::{ModuleDescriptor, Registrar};
use orbit_kernel::factory::ModuleSelection;
use orbit_kernel::route::{RouteEntry, RouteTable};

pub use dashboard::deployment_filter;

pub const MODULE: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Cd, required_flags: FeatureFlags::empty(), register };

const PROJECT: &str = "/account/:accountId/cd/orgs/:orgIdentifier/projects/:projectIdentifier";

#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::for_module(ModuleName::Cd)
        .with(
            "cd-home",
            RouteEntry::builder()
                .path("/account/:accountId/cd/home")
                .title("Deployments")
                .page_id("cd-home")
                .page(pages::home)
                .layout(pages::cd_layout)
                .build(),
        )
        .with(
            "cd-pipelines",
            RouteEntry::builder()
                .path(format!("{PROJECT}/pipelines"))
                .title("Pipelines")
                .page_id("cd-pipelines")
                .page(pages::pipelines)
                .layout(pages::cd_layout)
                .build(),
        )
        .with(
            "cd-pipeline-studio",
            RouteEntry::builder()
                .path(format!("{PROJECT}/pipelines/:pipelineIdentifier/pipeline-studio"))
                .title("Pipeline Studio")
                .page_id("cd-pipeline-studio")
                .page(pages::pipeline_studio)
                .layout(pages::cd_layout)
                .build(),
        )
        .with(
            "cd-executions",
            RouteEntry::builder()
                .path(format!("{PROJECT}/pipelines/:pipelineIdentifier/executions"))
                .title("Executions")
                .page_id("cd-executions")
                .page(pages::executions)
                .layout(pages::cd_layout)
                .build(),
        )
        .with(
            "cd-templates",
            RouteEntry::builder()
                .path(format!("{PROJECT}/templates"))
                .title("Templates")
                .page_id("cd-templates")
                .page(pages::templates)
                .layout(pages::cd_layout)
                .flags(FeatureFlags::PIPELINE_TEMPLATES)
                .build(),
        )
        .with(
            "cd-gitops",
            RouteEntry::builder()
                .path("/account/:accountId/cd/gitops")
                .title("GitOps")
                .page_id("cd-gitops")
                .page(pages::gitops)
                .layout(pages::cd_layout)
                .flags(FeatureFlags::GITOPS)
                .build(),
        )
}

fn register(registrar: &mut Registrar<'_>) {
    registrar
        .routes(routes())
        .landing(dashboard::landing)
        .selection(ModuleSelection {
            label: "Deployments".into(),
            description: "Deploy services to any environment".into(),
            icon: "cd-main".into(),
            route: "cd-home".into(),
        })
        .trigger("webhook", pages::webhook_trigger)
        .trigger("cron", pages::cron_trigger)
        .templates(pages::template_renderers());
    tracing::debug!(flags = ?registrar.flags(), "CD module registered");
}
