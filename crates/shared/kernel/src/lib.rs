//! Kernel of the console: everything feature modules plug into.
//!
//! * [`registry`]: typed last-write-wins lookup tables.
//! * [`factory`]: the landing-dashboard, module-selection and trigger registries.
//! * [`route`]: route entries, URL generation, table aggregation and the uniqueness check.
//! * [`rsql`]: validated RSQL filter expressions.
//! * [`store`]: read-mostly application state with a single writer.
//! * [`template`]: template kinds and their render table.
//! * [`bootstrap`]: module installation and the frozen [`bootstrap::Console`] snapshot.
//!
//! ## Config loading
//! ```rust,ignore
//! use orbit_kernel::config::load_console_config;
//!
//! let cfg = load_console_config(Some(std::path::Path::new("console.toml")))?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod factory;
pub mod registry;
pub mod route;
pub mod rsql;
pub mod store;
pub mod template;
pub mod view;

pub use orbit_domain as domain;

pub mod prelude {
    pub use crate::bootstrap::{Bootstrap, Console, ModuleDescriptor, Registrar};
    pub use crate::factory::{DashboardContext, ModuleSelection, TriggerForm};
    pub use crate::route::{Params, RouteEntry, RouteTable, params};
    pub use crate::store::{AppState, AppStore};
    pub use crate::view::{PageContext, View};
    pub use orbit_domain::features::FeatureFlags;
    pub use orbit_domain::module::ModuleName;
}
