//! # Domain Models
//!
//! Pure data shared by every console crate: module identifiers, feature flags,
//! license information and the console configuration tree.
//! Keep it lean: no I/O and no logic beyond parsing and set helpers.

pub mod config;
pub mod features;
pub mod license;
pub mod module;
