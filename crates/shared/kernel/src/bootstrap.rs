//! Explicit bootstrap: run every module's registration, then freeze the result.
//!
//! ```rust,ignore
//! let (store, writer) = AppStore::new(AppState::new(flags, license));
//! let console = Console::bootstrap(store)
//!     .account_id("acc-1")
//!     .module(orbit_common::MODULE)
//!     .module(orbit_cd::MODULE)
//!     .build()?;
//! let view = console.render_landing(ModuleName::Cd);
//! ```

use crate::factory::{
    DEFAULT_TRIGGER, DashboardContext, LandingDashboardFactory, LandingHandler, ModuleSelection,
    ModuleSelectionFactory, TriggerFactory, TriggerForm, TriggerRenderer, landing_dashboard_factory,
    module_selection_factory, trigger_factory,
};
use crate::route::{Params, RouteEntry, RouteTable};
use crate::store::AppStore;
use crate::template::{Template, TemplateRenderers};
use crate::view::{PageContext, View};
use orbit_domain::features::FeatureFlags;
use orbit_domain::module::{ModuleName, ModuleSet};
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, info};

#[orbit_derive::orbit_error]
pub enum BootstrapError {
    #[error("Bootstrap validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// What a feature crate exports so the shell can install it.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDescriptor {
    pub name: ModuleName,
    /// Flags that must all be enabled for the module to be installed.
    pub required_flags: FeatureFlags,
    pub register: fn(&mut Registrar<'_>),
}

#[derive(Debug)]
struct Parts {
    routes: RouteTable,
    landing: LandingDashboardFactory,
    selection: ModuleSelectionFactory,
    triggers: TriggerFactory,
    templates: TemplateRenderers,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            routes: RouteTable::default(),
            landing: landing_dashboard_factory(),
            selection: module_selection_factory(),
            triggers: trigger_factory(),
            templates: TemplateRenderers::default(),
        }
    }
}

/// Write access to the registries, scoped to one module's registration call.
#[derive(Debug)]
pub struct Registrar<'a> {
    module: ModuleName,
    flags: FeatureFlags,
    parts: &'a mut Parts,
}

impl Registrar<'_> {
    #[must_use]
    pub const fn module(&self) -> ModuleName {
        self.module
    }

    #[must_use]
    pub const fn flags(&self) -> FeatureFlags {
        self.flags
    }

    /// Merges the module's routes, dropping entries whose flags are not all enabled.
    /// Every merged entry is owned by the registering module.
    pub fn routes(&mut self, mut table: RouteTable) -> &mut Self {
        let flags = self.flags;
        table.assign_module(self.module);
        table.retain(|name, entry| {
            let enabled = flags.contains(entry.flags);
            if !enabled {
                debug!(route = name, required = ?entry.flags, "Route skipped: feature flags disabled");
            }
            enabled
        });
        self.parts.routes.merge(table);
        self
    }

    pub fn landing(&mut self, handler: LandingHandler) -> &mut Self {
        self.parts.landing.register(self.module, handler);
        self
    }

    pub fn selection(&mut self, selection: ModuleSelection) -> &mut Self {
        self.parts.selection.register(self.module, selection);
        self
    }

    pub fn trigger(&mut self, slot: impl Into<String>, renderer: TriggerRenderer) -> &mut Self {
        self.parts.triggers.register(slot.into(), renderer);
        self
    }

    /// Replaces the template renderers; the last module to call this wins.
    pub fn templates(&mut self, renderers: TemplateRenderers) -> &mut Self {
        self.parts.templates = renderers;
        self
    }
}

/// Collects module descriptors and produces a [`Console`].
#[derive(Debug)]
pub struct Bootstrap {
    store: AppStore,
    account_id: String,
    modules: Vec<ModuleDescriptor>,
}

impl Bootstrap {
    #[must_use]
    pub fn new(store: AppStore) -> Self {
        Self { store, account_id: "default".to_owned(), modules: Vec::new() }
    }

    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    #[must_use]
    pub fn module(mut self, descriptor: ModuleDescriptor) -> Self {
        self.modules.push(descriptor);
        self
    }

    #[must_use]
    pub fn modules<I>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = ModuleDescriptor>,
    {
        self.modules.extend(descriptors);
        self
    }

    /// Runs the registration of every licensed module whose flags are enabled, in the
    /// order the descriptors were added.
    ///
    /// # Errors
    /// Returns [`BootstrapError::Validation`] if no module ends up installed.
    pub fn build(self) -> Result<Console, BootstrapError> {
        let flags = self.store.feature_flags();
        let mut parts = Parts::default();
        let mut installed = ModuleSet::empty();

        for descriptor in &self.modules {
            let name = descriptor.name;
            if !self.store.is_module_licensed(name) {
                info!(module = %name, "Module skipped: not licensed");
                continue;
            }
            if !flags.contains(descriptor.required_flags) {
                info!(module = %name, required = ?descriptor.required_flags, "Module skipped: feature flags disabled");
                continue;
            }

            let mut registrar = Registrar { module: name, flags, parts: &mut parts };
            (descriptor.register)(&mut registrar);
            installed |= name.as_set();
            debug!(module = %name, "Module registered");
        }

        if installed.is_empty() {
            return Err(BootstrapError::Validation {
                message: "no module was installed".into(),
                context: Some(format!("{} descriptor(s) offered", self.modules.len()).into()),
            });
        }

        info!(modules = ?installed, routes = parts.routes.len(), "Console bootstrapped");

        Ok(Console {
            inner: Arc::new(ConsoleInner {
                routes: parts.routes,
                landing: parts.landing,
                selection: parts.selection,
                triggers: parts.triggers,
                templates: parts.templates,
                installed,
                account_id: self.account_id,
                store: self.store,
            }),
        })
    }
}

#[derive(Debug)]
pub struct ConsoleInner {
    pub routes: RouteTable,
    pub landing: LandingDashboardFactory,
    pub selection: ModuleSelectionFactory,
    pub triggers: TriggerFactory,
    pub templates: TemplateRenderers,
    installed: ModuleSet,
    account_id: String,
    store: AppStore,
}

/// Immutable snapshot of everything the modules registered.
#[derive(Debug, Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

impl Console {
    #[must_use]
    pub fn bootstrap(store: AppStore) -> Bootstrap {
        Bootstrap::new(store)
    }

    #[must_use]
    pub fn installed(&self) -> ModuleSet {
        self.inner.installed
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.inner.account_id
    }

    #[must_use]
    pub fn store(&self) -> &AppStore {
        &self.inner.store
    }

    /// Renders the module's landing dashboard, or a fallback when none is registered.
    #[must_use]
    pub fn render_landing(&self, module: ModuleName) -> View {
        let state = self.inner.store.snapshot();
        let ctx = DashboardContext { module, account_id: &self.inner.account_id, state: &state };
        self.inner.landing.get(&module).map_or_else(
            || {
                View::new(format!("{module} is not available"))
                    .line("This module is not installed or not licensed for the account.")
            },
            |handler| handler(&ctx),
        )
    }

    /// Renders a trigger form: its own slot, then the default slot, then a fallback.
    #[must_use]
    pub fn render_trigger(&self, form: &TriggerForm) -> View {
        self.inner
            .triggers
            .get(form.slot.as_str())
            .or_else(|| self.inner.triggers.get(DEFAULT_TRIGGER))
            .map_or_else(
                || View::new(format!("Trigger '{}'", form.identifier)).line("No trigger form available."),
                |renderer| renderer(form),
            )
    }

    #[must_use]
    pub fn render_template(&self, template: &Template) -> View {
        self.inner.templates.render(template)
    }

    /// Module switcher entries in module order.
    #[must_use]
    pub fn module_selection(&self) -> Vec<(ModuleName, &ModuleSelection)> {
        ModuleSet::ALL
            .modules()
            .filter_map(|m| self.inner.selection.get(&m).map(|s| (m, s)))
            .collect()
    }

    /// Resolves a concrete path and renders the matching page inside its layout.
    #[must_use]
    pub fn render_path(&self, path: &str, query: &Params) -> Option<View> {
        let (_, entry, params) = self.inner.routes.resolve(path)?;
        Some(self.render_entry(entry, &params, query))
    }

    #[must_use]
    pub fn render_route(&self, name: &str, params: &Params, query: &Params) -> Option<View> {
        let entry = self.inner.routes.get(name)?;
        Some(self.render_entry(entry, params, query))
    }

    fn render_entry(&self, entry: &RouteEntry, params: &Params, query: &Params) -> View {
        let state = self.inner.store.snapshot();
        let ctx = PageContext { page_id: &entry.page_id, params, query, state: &state };
        let view = (entry.page)(&ctx);
        match entry.layout {
            Some(layout) => layout(view, &ctx),
            None => view,
        }
    }
}

impl Deref for Console {
    type Target = ConsoleInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
