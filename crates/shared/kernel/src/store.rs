//! Read-mostly application state.
//!
//! [`AppStore::new`] hands out one [`AppStoreWriter`]. The writer is not `Clone`; whoever
//! owns it (the shell) is the only component that can change the active route, the
//! feature flags or the license. Modules only ever see an [`AppStore`] reader.

use crate::route::Params;
use orbit_domain::features::FeatureFlags;
use orbit_domain::license::LicenseInfo;
use orbit_domain::module::ModuleName;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRoute {
    pub page_id: String,
    pub params: Params,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub active_route: Option<ActiveRoute>,
    pub feature_flags: FeatureFlags,
    pub license: LicenseInfo,
}

impl AppState {
    #[must_use]
    pub const fn new(feature_flags: FeatureFlags, license: LicenseInfo) -> Self {
        Self { active_route: None, feature_flags, license }
    }
}

#[derive(Debug, Clone)]
pub struct AppStore {
    inner: Arc<RwLock<AppState>>,
}

#[derive(Debug)]
pub struct AppStoreWriter {
    inner: Arc<RwLock<AppState>>,
}

impl AppStore {
    /// Creates the store and its single writer.
    #[must_use]
    pub fn new(initial: AppState) -> (Self, AppStoreWriter) {
        let inner = Arc::new(RwLock::new(initial));
        (Self { inner: Arc::clone(&inner) }, AppStoreWriter { inner })
    }

    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.inner.read().clone()
    }

    #[must_use]
    pub fn feature_flags(&self) -> FeatureFlags {
        self.inner.read().feature_flags
    }

    #[must_use]
    pub fn license(&self) -> LicenseInfo {
        self.inner.read().license
    }

    #[must_use]
    pub fn active_route(&self) -> Option<ActiveRoute> {
        self.inner.read().active_route.clone()
    }

    #[must_use]
    pub fn is_module_licensed(&self, module: ModuleName) -> bool {
        self.inner.read().license.covers(module)
    }
}

impl AppStoreWriter {
    pub fn set_active_route(&self, page_id: impl Into<String>, params: Params) {
        let page_id = page_id.into();
        debug!(page_id = %page_id, "Active route changed");
        self.inner.write().active_route = Some(ActiveRoute { page_id, params });
    }

    pub fn clear_active_route(&self) {
        self.inner.write().active_route = None;
    }

    pub fn set_feature_flags(&self, flags: FeatureFlags) {
        debug!(flags = ?flags, "Feature flags updated");
        self.inner.write().feature_flags = flags;
    }

    pub fn set_license(&self, license: LicenseInfo) {
        debug!(edition = %license.edition, modules = ?license.modules, "License updated");
        self.inner.write().license = license;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_domain::license::Edition;
    use orbit_domain::module::ModuleSet;

    #[test]
    fn writer_changes_are_visible_to_readers() {
        let (store, writer) = AppStore::new(AppState::default());
        let reader = store.clone();

        writer.set_active_route("cd-pipelines", Params::new());
        writer.set_feature_flags(FeatureFlags::GITOPS);

        assert_eq!(reader.active_route().map(|r| r.page_id), Some("cd-pipelines".to_owned()));
        assert_eq!(reader.feature_flags(), FeatureFlags::GITOPS);

        writer.clear_active_route();
        assert!(store.active_route().is_none());
    }

    #[test]
    fn license_gates_modules_but_not_common() {
        let (store, writer) = AppStore::new(AppState::default());
        writer.set_license(LicenseInfo::new(Edition::Free, ModuleSet::CD));

        assert!(store.is_module_licensed(ModuleName::Cd));
        assert!(store.is_module_licensed(ModuleName::Common));
        assert!(!store.is_module_licensed(ModuleName::Ce));
    }
}
