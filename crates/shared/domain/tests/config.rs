use orbit_domain::config::{AppConfig, ConsoleConfig, FeatureConfig, LicenseConfig, LogConfig};
use orbit_domain::features::FeatureFlags;
use orbit_domain::license::Edition;
use orbit_domain::module::{ModuleName, ModuleSet};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let app = AppConfig::default();
    assert_eq!(app.account_id, "default");

    assert_eq!(FeatureConfig::default().flags(), FeatureFlags::ALL);

    let license = LicenseConfig::default().info();
    assert_eq!(license.edition, Edition::Enterprise);
    assert!(license.modules.has(ModuleName::Cv));
    assert!(license.covers(ModuleName::Common));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
}

#[test]
fn console_config_deserializes() {
    let raw = json!({
        "app": { "account_id": "acc-1", "base_url": "https://console.example" },
        "features": { "flags": ["gitops", "SRM_SLO", "unknown"] },
        "license": { "edition": "team", "modules": ["cd", "CI"] }
    });

    let cfg: ConsoleConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.app.account_id, "acc-1");
    assert_eq!(cfg.features.flags(), FeatureFlags::GITOPS | FeatureFlags::SRM_SLO);

    let license = cfg.license.info();
    assert_eq!(license.edition, Edition::Team);
    assert_eq!(license.modules, ModuleSet::CD | ModuleSet::CI);
    assert!(!license.covers(ModuleName::Cf));
    assert!(license.covers(ModuleName::Common));

    assert_eq!(cfg.log.level, "info");
}

#[test]
fn unknown_module_is_rejected() {
    let raw = json!({ "license": { "modules": ["XX"] } });
    assert!(serde_json::from_value::<ConsoleConfig>(raw).is_err());
}
