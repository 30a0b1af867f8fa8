use orbit_domain::module::ModuleName;
use orbit_kernel::route::params;

#[test]
fn common_routes_are_unique_and_owned() {
    let table = orbit_common::routes();
    assert!(table.validate_unique().is_ok());
    assert!(table.iter().all(|(_, entry)| entry.module == ModuleName::Common));
}

#[test]
fn settings_url_carries_tab() {
    let table = orbit_common::routes();
    let settings = table.get("account-settings").expect("settings route");
    let url = settings
        .url(&params([("accountId", "acc-1")]), &params([("tab", "billing")]))
        .expect("url");
    assert_eq!(url, "/account/acc-1/settings?tab=billing");
}
