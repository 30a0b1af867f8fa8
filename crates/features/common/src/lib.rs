//! COMMON module: account home, account settings, the shared account layout and the
//! default trigger form used when a pipeline has no specific one.

mod pages;

use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::bootstrap::{ModuleDescriptor, Registrar};
use orbit_kernel::factory::DEFAULT_TRIGGER;
use orbit_kernel::route::{RouteEntry, RouteTable};

pub use pages::account_layout;

pub const MODULE: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Common, required_flags: FeatureFlags::empty(), register };

/// Route table of the module.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::for_module(ModuleName::Common)
        .with(
            "account-home",
            RouteEntry::builder()
                .path("/account/:accountId/home")
                .title("Home")
                .page_id("common-home")
                .page(pages::home)
                .layout(account_layout)
                .build(),
        )
        .with(
            "account-settings",
            RouteEntry::builder()
                .path("/account/:accountId/settings")
                .title("Account Settings")
                .page_id("common-settings")
                .page(pages::settings)
                .layout(account_layout)
                .build(),
        )
        .with(
            "account-modules",
            RouteEntry::builder()
                .path("/account/:accountId/modules")
                .title("Modules")
                .page_id("common-modules")
                .page(pages::modules)
                .layout(account_layout)
                .flags(FeatureFlags::NEW_NAV)
                .build(),
        )
}

fn register(registrar: &mut Registrar<'_>) {
    registrar.routes(routes()).trigger(DEFAULT_TRIGGER, pages::default_trigger);
    tracing::debug!("Common module registered");
}
