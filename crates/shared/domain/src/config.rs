use crate::features::FeatureFlags;
use crate::license::{Edition, LicenseInfo};
use crate::module::ModuleName;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level console configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfigInner {
    pub app: AppConfig,
    pub features: FeatureConfig,
    pub license: LicenseConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(flatten, default)]
    inner: Arc<ConsoleConfigInner>,
}

impl Deref for ConsoleConfig {
    type Target = ConsoleConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ConsoleConfig {
    fn deref_mut(&mut self) -> &mut ConsoleConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Account the console is opened for.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub account_id: String,
    pub base_url: String,
}

/// Enabled feature flags by name (`"gitops"`, `"all"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub flags: Vec<String>,
}

impl FeatureConfig {
    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        self.flags.iter().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub edition: Edition,
    pub modules: Vec<ModuleName>,
}

impl LicenseConfig {
    #[must_use]
    pub fn info(&self) -> LicenseInfo {
        LicenseInfo::new(self.edition, self.modules.iter().copied().collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for AppConfig {
    fn default() -> Self {
        Self { account_id: "default".to_owned(), base_url: "http://localhost:8181".to_owned() }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { flags: vec!["all".to_owned()] }
    }
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            edition: Edition::Enterprise,
            modules: vec![
                ModuleName::Cd,
                ModuleName::Ci,
                ModuleName::Ce,
                ModuleName::Cf,
                ModuleName::Cv,
            ],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
