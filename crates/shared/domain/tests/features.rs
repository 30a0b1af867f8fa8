use orbit_domain::features::{FeatureFlags, GITOPS, NEW_NAV};

#[test]
fn flag_names_parse() {
    assert_eq!(FeatureFlags::from(GITOPS), FeatureFlags::GITOPS);
    assert_eq!(FeatureFlags::from("New_Nav"), FeatureFlags::NEW_NAV);
    assert_eq!(FeatureFlags::from("*"), FeatureFlags::ALL);
    assert!(FeatureFlags::from("nope").is_empty());
}

#[test]
fn flags_collect_from_names() {
    let flags: FeatureFlags = [GITOPS, NEW_NAV].into_iter().collect();
    assert!(flags.contains(FeatureFlags::GITOPS | FeatureFlags::NEW_NAV));
    assert!(!flags.contains(FeatureFlags::SRM_SLO));
}

#[test]
fn flags_serialize_as_bits() {
    let flags = FeatureFlags::GITOPS;
    let raw = serde_json::to_string(&flags).expect("serialize");
    assert_eq!(raw, "2");
    let back: FeatureFlags = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, flags);
}
