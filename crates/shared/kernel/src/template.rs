//! Template kinds as a sum type, rendered through a table of functions.

use crate::view::View;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMeta {
    pub identifier: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Pipeline { meta: TemplateMeta, stages: Vec<String> },
    Stage { meta: TemplateMeta, stage_type: String },
    Step { meta: TemplateMeta, step_type: String },
    StepGroup { meta: TemplateMeta, steps: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "PascalCase")]
pub enum TemplateKind {
    Pipeline,
    Stage,
    Step,
    StepGroup,
}

impl Template {
    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        match self {
            Self::Pipeline { .. } => TemplateKind::Pipeline,
            Self::Stage { .. } => TemplateKind::Stage,
            Self::Step { .. } => TemplateKind::Step,
            Self::StepGroup { .. } => TemplateKind::StepGroup,
        }
    }

    #[must_use]
    pub const fn meta(&self) -> &TemplateMeta {
        match self {
            Self::Pipeline { meta, .. }
            | Self::Stage { meta, .. }
            | Self::Step { meta, .. }
            | Self::StepGroup { meta, .. } => meta,
        }
    }
}

/// One render function per template kind.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRenderers {
    pub pipeline: fn(&TemplateMeta, &[String]) -> View,
    pub stage: fn(&TemplateMeta, &str) -> View,
    pub step: fn(&TemplateMeta, &str) -> View,
    pub step_group: fn(&TemplateMeta, &[String]) -> View,
}

impl TemplateRenderers {
    #[must_use]
    pub fn render(&self, template: &Template) -> View {
        match template {
            Template::Pipeline { meta, stages } => (self.pipeline)(meta, stages),
            Template::Stage { meta, stage_type } => (self.stage)(meta, stage_type),
            Template::Step { meta, step_type } => (self.step)(meta, step_type),
            Template::StepGroup { meta, steps } => (self.step_group)(meta, steps),
        }
    }
}

impl Default for TemplateRenderers {
    fn default() -> Self {
        Self {
            pipeline: |meta, stages| {
                header(meta, TemplateKind::Pipeline).line(format!("stages: {}", stages.join(" -> ")))
            },
            stage: |meta, stage_type| header(meta, TemplateKind::Stage).line(format!("type: {stage_type}")),
            step: |meta, step_type| header(meta, TemplateKind::Step).line(format!("type: {step_type}")),
            step_group: |meta, steps| {
                header(meta, TemplateKind::StepGroup).line(format!("steps: {}", steps.len()))
            },
        }
    }
}

fn header(meta: &TemplateMeta, kind: TemplateKind) -> View {
    View::new(format!("{} ({kind})", meta.name))
        .line(format!("id: {}", meta.identifier))
        .line(format!("version: {}", meta.version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> TemplateMeta {
        TemplateMeta { identifier: name.to_lowercase(), name: name.to_owned(), version: "v1".to_owned() }
    }

    #[test]
    fn default_renderers_dispatch_by_kind() {
        let renderers = TemplateRenderers::default();
        let view = renderers.render(&Template::Pipeline {
            meta: meta("Deploy"),
            stages: vec!["build".to_owned(), "prod".to_owned()],
        });
        assert_eq!(view.title, "Deploy (Pipeline)");
        assert_eq!(view.lines.last().map(String::as_str), Some("stages: build -> prod"));

        let group = Template::StepGroup { meta: meta("Checks"), steps: vec!["lint".to_owned()] };
        assert_eq!(group.kind(), TemplateKind::StepGroup);
        assert_eq!(renderers.render(&group).title, "Checks (StepGroup)");
    }

    #[test]
    fn renderers_can_be_overridden_per_kind() {
        let renderers = TemplateRenderers { step: |meta, _| View::new(meta.name.clone()), ..Default::default() };
        let view = renderers.render(&Template::Step { meta: meta("Shell"), step_type: "Run".to_owned() });
        assert_eq!(view, View::new("Shell"));
    }
}
