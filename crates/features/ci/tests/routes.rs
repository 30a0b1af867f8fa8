use orbit_kernel::route::params;

#[test]
fn ci_routes_are_unique() {
    assert!(orbit_ci::routes().validate_unique().is_ok());
}

#[test]
fn build_route_resolves_from_concrete_path() {
    let table = orbit_ci::routes();
    let (name, _, found) = table
        .resolve("/account/acc/ci/orgs/default/projects/api/builds/42")
        .expect("resolves");
    assert_eq!(name, "ci-build");
    assert_eq!(found, params([
        ("accountId", "acc"),
        ("orgIdentifier", "default"),
        ("projectIdentifier", "api"),
        ("buildIdentifier", "42"),
    ]));
}
