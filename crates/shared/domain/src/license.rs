use crate::module::{ModuleName, ModuleSet};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Commercial edition of the account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Edition {
    Free,
    Team,
    #[default]
    Enterprise,
}

/// License information held in the application store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub edition: Edition,
    pub modules: ModuleSet,
}

impl LicenseInfo {
    #[must_use]
    pub const fn new(edition: Edition, modules: ModuleSet) -> Self {
        Self { edition, modules }
    }

    /// `COMMON` is part of every license.
    #[must_use]
    pub const fn covers(&self, module: ModuleName) -> bool {
        matches!(module, ModuleName::Common) || self.modules.has(module)
    }
}

impl Default for LicenseInfo {
    fn default() -> Self {
        Self { edition: Edition::default(), modules: ModuleSet::ALL }
    }
}
