use orbit_domain::license::{Edition, LicenseInfo};
use orbit_domain::module::ModuleSet;
use orbit_kernel::bootstrap::BootstrapError;
use orbit_kernel::prelude::*;

fn home_page(ctx: &PageContext<'_>) -> View {
    View::new("CD Home").line(format!("account {}", ctx.param("accountId")))
}

fn gitops_page(_: &PageContext<'_>) -> View {
    View::new("GitOps")
}

fn framed(view: View, ctx: &PageContext<'_>) -> View {
    View::new(format!("[{}] {}", ctx.page_id, view.title)).lines(view.lines)
}

fn cd_landing(ctx: &DashboardContext<'_>) -> View {
    View::new(format!("{} dashboard", ctx.module))
}

fn first_landing(_: &DashboardContext<'_>) -> View {
    View::new("first")
}

fn second_landing(_: &DashboardContext<'_>) -> View {
    View::new("second")
}

fn default_trigger(form: &TriggerForm) -> View {
    View::new(format!("default form for {}", form.identifier))
}

fn register_cd(registrar: &mut Registrar<'_>) {
    let routes = RouteTable::for_module(registrar.module())
        .with(
            "cd-home",
            RouteEntry::builder()
                .path("/account/:accountId/cd")
                .title("Deployments")
                .page_id("cd-home")
                .page(home_page)
                .layout(framed)
                .build(),
        )
        .with(
            "cd-gitops",
            RouteEntry::builder()
                .path("/account/:accountId/cd/gitops")
                .title("GitOps")
                .page_id("cd-gitops")
                .page(gitops_page)
                .flags(FeatureFlags::GITOPS)
                .build(),
        );

    registrar.routes(routes).landing(cd_landing).selection(ModuleSelection {
        label: "Deployments".into(),
        description: "Continuous Delivery".into(),
        icon: "cd-main".into(),
        route: "cd-home".into(),
    });
}

fn register_ci(registrar: &mut Registrar<'_>) {
    registrar.landing(first_landing).landing(second_landing).trigger("default", default_trigger);
}

fn register_cd_untagged(registrar: &mut Registrar<'_>) {
    registrar.routes(RouteTable::default().with(
        "cd-untagged",
        RouteEntry::builder()
            .path("/account/:accountId/cd/untagged")
            .title("Untagged")
            .page_id("cd-untagged")
            .page(gitops_page)
            .build(),
    ));
}

const CD: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Cd, required_flags: FeatureFlags::empty(), register: register_cd };
const CI: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Ci, required_flags: FeatureFlags::empty(), register: register_ci };
const CF: ModuleDescriptor =
    ModuleDescriptor { name: ModuleName::Cf, required_flags: FeatureFlags::FF_TARGETS, register: register_ci };

fn store(flags: FeatureFlags, modules: ModuleSet) -> AppStore {
    AppStore::new(AppState::new(flags, LicenseInfo::new(Edition::Enterprise, modules))).0
}

#[test]
fn registers_licensed_modules_in_order() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL))
        .account_id("acc-1")
        .modules([CD, CI])
        .build()?;

    assert_eq!(console.installed(), ModuleSet::CD | ModuleSet::CI);
    assert_eq!(console.routes.len(), 2);
    assert!(console.routes.validate_unique().is_ok());
    assert_eq!(console.render_landing(ModuleName::Cd).title, "CD dashboard");
    Ok(())
}

#[test]
fn duplicate_registration_keeps_the_last_handler() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).module(CI).build()?;
    assert_eq!(console.render_landing(ModuleName::Ci).title, "second");
    Ok(())
}

#[test]
fn unregistered_module_renders_fallback() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).module(CD).build()?;
    assert!(console.landing.get(&ModuleName::Cv).is_none());
    assert_eq!(console.render_landing(ModuleName::Cv).title, "CV is not available");
    Ok(())
}

#[test]
fn unlicensed_and_flagged_modules_are_skipped() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::empty(), ModuleSet::CD))
        .modules([CD, CI, CF])
        .build()?;

    assert_eq!(console.installed(), ModuleSet::CD);
    assert!(console.routes.get("cd-home").is_some());
    assert!(console.routes.get("cd-gitops").is_none(), "GITOPS route is gated");
    Ok(())
}

#[test]
fn nothing_installed_is_rejected() {
    let result = Console::bootstrap(store(FeatureFlags::empty(), ModuleSet::empty())).module(CF).build();
    assert!(matches!(result, Err(BootstrapError::Validation { .. })));
}

#[test]
fn render_path_applies_layout() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).module(CD).build()?;

    let view = console.render_path("/account/acc-9/cd", &Params::new()).expect("route resolves");
    assert_eq!(view.title, "[cd-home] CD Home");
    assert_eq!(view.lines, vec!["account acc-9".to_owned()]);

    assert!(console.render_path("/account/acc-9/ce", &Params::new()).is_none());
    Ok(())
}

#[test]
fn trigger_falls_back_to_default_slot() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).modules([CD, CI]).build()?;
    let form = TriggerForm { slot: "webhook".to_owned(), identifier: "nightly".to_owned(), values: Params::new() };

    assert_eq!(console.render_trigger(&form).title, "default form for nightly");
    Ok(())
}

#[test]
fn selection_lists_registered_modules() -> Result<(), BootstrapError> {
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).modules([CD, CI]).build()?;
    let entries = console.module_selection();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, ModuleName::Cd);
    assert_eq!(entries[0].1.route, "cd-home");
    Ok(())
}

#[test]
fn registered_routes_belong_to_the_registering_module() -> Result<(), BootstrapError> {
    let untagged =
        ModuleDescriptor { name: ModuleName::Cd, required_flags: FeatureFlags::empty(), register: register_cd_untagged };
    let console = Console::bootstrap(store(FeatureFlags::ALL, ModuleSet::ALL)).module(untagged).build()?;

    assert_eq!(console.routes.get("cd-untagged").map(|e| e.module), Some(ModuleName::Cd));
    assert_eq!(console.routes.module_routes(ModuleName::Cd).count(), 1);
    assert_eq!(console.routes.module_routes(ModuleName::Common).count(), 0);
    Ok(())
}
