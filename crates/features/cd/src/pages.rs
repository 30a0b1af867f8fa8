use orbit_kernel::factory::TriggerForm;
use orbit_kernel::template::{Template, TemplateMeta, TemplateRenderers};
use orbit_kernel::view::{PageContext, View};

pub(crate) fn cd_layout(view: View, ctx: &PageContext<'_>) -> View {
    let mut framed = View::new(format!("CD / {}", view.title));
    if !ctx.param("projectIdentifier").is_empty() {
        framed = framed.line(format!(
            "project: {}/{}",
            ctx.param("orgIdentifier"),
            ctx.param("projectIdentifier")
        ));
    }
    framed.lines(view.lines)
}

pub(crate) fn home(_: &PageContext<'_>) -> View {
    View::new("Deployments").line("Recent deployments and active services")
}

pub(crate) fn pipelines(ctx: &PageContext<'_>) -> View {
    let view = View::new("Pipelines");
    match ctx.query.get("searchTerm") {
        Some(term) => view.line(format!("search: {term}")),
        None => view.line("all pipelines"),
    }
}

pub(crate) fn pipeline_studio(ctx: &PageContext<'_>) -> View {
    let mode = ctx.query.get("view").map_or("visual", String::as_str);
    View::new(format!("Pipeline {}", ctx.param("pipelineIdentifier"))).line(format!("editor: {mode}"))
}

pub(crate) fn executions(ctx: &PageContext<'_>) -> View {
    let page = ctx.query.get("page").map_or("0", String::as_str);
    View::new(format!("Executions of {}", ctx.param("pipelineIdentifier"))).line(format!("page: {page}"))
}

/// Default renderers with a deployment-aware stage view.
pub(crate) fn template_renderers() -> TemplateRenderers {
    TemplateRenderers { stage: stage_template, ..TemplateRenderers::default() }
}

fn stage_template(meta: &TemplateMeta, stage_type: &str) -> View {
    let view = View::new(format!("{} (Stage)", meta.name)).line(format!("type: {stage_type}"));
    if stage_type == "Deployment" { view.line("requires: service, environment") } else { view }
}

pub(crate) fn templates(_: &PageContext<'_>) -> View {
    let renderers = template_renderers();
    let samples = [
        Template::Pipeline {
            meta: meta("golden_path", "Golden Path"),
            stages: vec!["build".to_owned(), "deploy".to_owned()],
        },
        Template::Stage { meta: meta("k8s_deploy", "Kubernetes Deploy"), stage_type: "Deployment".to_owned() },
    ];
    samples.iter().map(|t| renderers.render(t)).fold(View::new("Templates"), |view, rendered| {
        view.line(rendered.title.into_owned())
    })
}

pub(crate) fn gitops(_: &PageContext<'_>) -> View {
    View::new("GitOps").line("Applications synced from Git")
}

pub(crate) fn webhook_trigger(form: &TriggerForm) -> View {
    let event = form.values.get("event").map_or("push", String::as_str);
    View::new(format!("Webhook trigger {}", form.identifier)).line(format!("event: {event}"))
}

pub(crate) fn cron_trigger(form: &TriggerForm) -> View {
    let expression = form.values.get("expression").map_or("0 0 * * *", String::as_str);
    View::new(format!("Cron trigger {}", form.identifier)).line(format!("schedule: {expression}"))
}

fn meta(identifier: &str, name: &str) -> TemplateMeta {
    TemplateMeta { identifier: identifier.to_owned(), name: name.to_owned(), version: "v1".to_owned() }
}
