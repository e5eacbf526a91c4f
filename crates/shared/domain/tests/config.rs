use wpt_domain::brand::Brand;
use wpt_domain::config::{
    AccessConfig, ApiConfig, BrandingConfig, LogRotation, ServerConfig, TenancyConfig,
};
use wpt_domain::tenant::{ResolutionPolicy, TenantId};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let tenancy = TenancyConfig::default();
    assert_eq!(tenancy.policy, ResolutionPolicy::Strict);
    assert_eq!(tenancy.routes.len(), 3);
    assert!(tenancy.routes.iter().all(|r| r.tenant == TenantId::new("ms")));

    let branding = BrandingConfig::default();
    assert_eq!(branding.default_brand, Brand::OverflowOne);
    assert_eq!(branding.tenant_brands.get(&TenantId::new("ms")), Some(&Brand::DescubraMs));
    assert!(branding.regions.len() >= 4);
    assert_eq!(branding.segment_brands.get("solucoes"), Some(&Brand::FlowTrip));
    assert_eq!(branding.segment_brands.get("eventos"), Some(&Brand::DescubraMs));

    let access = AccessConfig::default();
    assert_eq!(access.platform_login, "/viajar/login");
    assert_eq!(access.default_login, "/descubrams/login");
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "tenancy": {
            "policy": "two-letter",
            "routes": [{ "segment": "pr", "tenant": "PR", "prefix": "/parana" }]
        },
        "branding": { "default_brand": "flow-trip", "segment_brands": {} }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.tenancy.policy, ResolutionPolicy::TwoLetter);
    assert_eq!(cfg.tenancy.routes[0].tenant.as_str(), "pr");
    assert_eq!(cfg.tenancy.routes[0].prefix, "/parana");
    assert_eq!(cfg.branding.default_brand, Brand::FlowTrip);
    assert!(cfg.branding.segment_brands.is_empty());
    // Sections that were not mentioned keep their defaults.
    assert_eq!(cfg.branding.tenant_brands.len(), 1);
    assert_eq!(cfg.access.platform_prefixes.len(), 5);
}

#[test]
fn brand_and_role_string_forms() {
    assert_eq!(Brand::DescubraMs.to_string(), "descubra-ms");
    assert_eq!("Flow-Trip".parse::<Brand>().ok(), Some(Brand::FlowTrip));

    let role: wpt_domain::role::Role = serde_json::from_value(json!("city_admin")).unwrap();
    assert_eq!(role, wpt_domain::role::Role::CityAdmin);
    let unknown: wpt_domain::role::Role = serde_json::from_value(json!("tourist")).unwrap();
    assert_eq!(unknown, wpt_domain::role::Role::User);
}

#[test]
fn logging_section_defaults_and_file_output() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.console);
    assert!(cfg.logging.file.is_none());

    let raw = json!({
        "logging": {
            "level": "debug",
            "directives": "wpt_tenancy=trace",
            "file": { "dir": "/var/log/wpt", "rotation": "hourly", "json": true }
        }
    });
    let cfg: ApiConfig = serde_json::from_value(raw).expect("logging config");
    let file = cfg.logging.file.as_ref().expect("file section");
    assert_eq!(cfg.logging.directives.as_deref(), Some("wpt_tenancy=trace"));
    assert_eq!(file.rotation, LogRotation::Hourly);
    assert_eq!(file.max_files, 10);
    assert!(file.json);
}
