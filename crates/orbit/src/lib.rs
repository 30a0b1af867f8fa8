//! Facade crate for the console's feature modules and shared kernel.
//! Re-exports domain/kernel primitives and assembles the module list the shell boots.
//! Keep this crate thin: it composes other crates, it does not implement pages.
//!
//! ## Usage
//! - Add `orbit` with the desired module features (`cd`, `ci`, `ce`, `cf` or `full`).
//! - Call [`bootstrap`] with the loaded config to get the frozen [`Console`] and the
//!   store writer.

pub use orbit_domain as domain;
pub use orbit_kernel as kernel;

use orbit_domain::config::ConsoleConfig;
use orbit_kernel::bootstrap::{BootstrapError, Console, ModuleDescriptor};
use orbit_kernel::store::{AppState, AppStore, AppStoreWriter};
use tracing::debug;

/// Module registry for runtime introspection.
pub mod features {
    pub use orbit_common as common;
    #[cfg(feature = "cd")]
    pub use orbit_cd as cd;
    #[cfg(feature = "ce")]
    pub use orbit_ce as ce;
    #[cfg(feature = "cf")]
    pub use orbit_cf as cf;
    #[cfg(feature = "ci")]
    pub use orbit_ci as ci;

    /// Build-time enabled modules (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "common",
        #[cfg(feature = "cd")]
        "cd",
        #[cfg(feature = "ci")]
        "ci",
        #[cfg(feature = "ce")]
        "ce",
        #[cfg(feature = "cf")]
        "cf",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.iter().any(|enabled| enabled.eq_ignore_ascii_case(name))
    }
}

/// Descriptors of every compiled-in module, shared module first.
#[must_use]
pub fn descriptors() -> Vec<ModuleDescriptor> {
    vec![
        orbit_common::MODULE,
        #[cfg(feature = "cd")]
        orbit_cd::MODULE,
        #[cfg(feature = "ci")]
        orbit_ci::MODULE,
        #[cfg(feature = "ce")]
        orbit_ce::MODULE,
        #[cfg(feature = "cf")]
        orbit_cf::MODULE,
    ]
}

/// Builds the application state from `config` and installs every compiled-in module.
///
/// # Errors
/// Returns [`BootstrapError`] if no module could be installed.
pub fn bootstrap(config: &ConsoleConfig) -> Result<(Console, AppStoreWriter), BootstrapError> {
    let flags = config.features.flags();
    let license = config.license.info();
    debug!(?flags, edition = %license.edition, modules = ?license.modules, "Bootstrapping console");

    let (store, writer) = AppStore::new(AppState::new(flags, license));
    let console = Console::bootstrap(store)
        .account_id(config.app.account_id.clone())
        .modules(descriptors())
        .build()?;
    Ok((console, writer))
}
