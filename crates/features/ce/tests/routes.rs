use orbit_kernel::route::params;

#[test]
fn ce_routes_are_unique() {
    assert!(orbit_ce::routes().validate_unique().is_ok());
}

#[test]
fn perspective_url_encodes_names() {
    let table = orbit_ce::routes();
    let entry = table.get("ce-perspective").expect("perspective route");
    let url = entry
        .url(
            &params([("accountId", "acc"), ("perspectiveId", "p1"), ("perspectiveName", "All Clusters")]),
            &params(Vec::<(String, String)>::new()),
        )
        .expect("url");
    assert_eq!(url, "/account/acc/ce/perspectives/p1/name/All%20Clusters");
}

#[test]
fn spend_filter_uses_comparisons() {
    let filter = orbit_ce::spend_filter("GCP", 10, 500).expect("filter");
    assert_eq!(filter.as_str(), "(cloudProvider==GCP;cost=ge=10;cost=lt=500)");
}
