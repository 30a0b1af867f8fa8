//! The concrete registries modules contribute to.

use crate::registry::Registry;
use crate::route::Params;
use crate::store::AppState;
use crate::view::View;
use orbit_domain::module::ModuleName;
use std::borrow::Cow;

/// Trigger slot rendered when a pipeline has no specific trigger form.
pub const DEFAULT_TRIGGER: &str = "default";

/// Inputs handed to a landing-dashboard handler.
#[derive(Debug, Clone, Copy)]
pub struct DashboardContext<'a> {
    pub module: ModuleName,
    pub account_id: &'a str,
    pub state: &'a AppState,
}

pub type LandingHandler = fn(&DashboardContext<'_>) -> View;

/// Entry shown in the module switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSelection {
    pub label: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    /// Route name opened when the module is picked.
    pub route: Cow<'static, str>,
}

/// Values of a trigger form being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerForm {
    pub slot: String,
    pub identifier: String,
    pub values: Params,
}

pub type TriggerRenderer = fn(&TriggerForm) -> View;

pub type LandingDashboardFactory = Registry<ModuleName, LandingHandler>;
pub type ModuleSelectionFactory = Registry<ModuleName, ModuleSelection>;
pub type TriggerFactory = Registry<String, TriggerRenderer>;

#[must_use]
pub fn landing_dashboard_factory() -> LandingDashboardFactory {
    Registry::new("landing-dashboard")
}

#[must_use]
pub fn module_selection_factory() -> ModuleSelectionFactory {
    Registry::new("module-selection")
}

#[must_use]
pub fn trigger_factory() -> TriggerFactory {
    Registry::new("trigger")
}
