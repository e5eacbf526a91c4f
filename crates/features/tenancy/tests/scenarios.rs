use wpt_kernel::domain::config::TenancyConfig;
use wpt_kernel::domain::tenant::TenantRoute;
use wpt_tenancy::{Resolution, ResolutionPolicy, Tenancy, TenancyError, init};

fn tenancy(policy: ResolutionPolicy) -> Tenancy {
    let config = TenancyConfig { policy, ..TenancyConfig::default() };
    Tenancy::from_config(&config).expect("default config is valid")
}

#[test]
fn ms_paths_keep_ms_prefix() {
    let t = tenancy(ResolutionPolicy::Strict);
    let resolution = t.resolve("/ms/destinos");
    assert_eq!(resolution.tenant().map(|id| id.as_str()), Some("ms"));
    assert_eq!(t.link_builder("/ms/destinos").with_tenant("/login"), "/ms/login");
}

#[test]
fn long_alias_rewrites_to_descubrams() {
    for policy in [ResolutionPolicy::Strict, ResolutionPolicy::TwoLetter] {
        let t = tenancy(policy);
        let links = t.link_builder("/descubramatogrossodosul/eventos");
        assert_eq!(links.with_tenant("/"), "/descubrams");
        assert_eq!(
            t.resolve("/descubramatogrossodosul/eventos").tenant(),
            t.resolve("/ms").tenant()
        );
    }
}

#[test]
fn marketing_pages_are_global() {
    let t = tenancy(ResolutionPolicy::TwoLetter);
    assert!(!t.is_tenant_path("/sobre-overflow-one"));
    assert_eq!(t.link_builder("/sobre-overflow-one").with_tenant("/precos"), "/precos");
}

#[test]
fn unknown_two_letter_route_depends_on_policy() {
    let strict = tenancy(ResolutionPolicy::Strict);
    assert_eq!(strict.resolve("/xy/anything"), Resolution::Global);

    // Legacy heuristic: misidentifies `/xy` as a tenant.
    let legacy = tenancy(ResolutionPolicy::TwoLetter);
    let scope = legacy.resolve("/xy/anything").scope().cloned().expect("tenant scope");
    assert_eq!(scope.tenant.as_str(), "xy");
    assert_eq!(legacy.link_builder("/xy/anything").with_tenant("/login"), "/xy/login");
}

#[test]
fn with_tenant_does_not_double_prefix() {
    let links = tenancy(ResolutionPolicy::Strict).link_builder("/ms/destinos");
    let once = links.with_tenant("/eventos");
    assert_eq!(once, "/ms/eventos");
    assert_eq!(links.with_tenant(&once), once);
}

#[test]
fn init_registers_slice_and_rejects_bad_tables() {
    let slice = init(&TenancyConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Tenancy>());
    assert_eq!(slice.name, "tenancy");

    let broken = TenancyConfig {
        policy: ResolutionPolicy::Strict,
        routes: vec![TenantRoute::new("ms", "ms", "/ms"), TenantRoute::new("ms", "ms", "/ms")],
    };
    let err = init(&broken).unwrap_err();
    assert!(matches!(err, TenancyError::DuplicateSegment { .. }));
    assert!(err.to_string().contains("(tenancy.routes)"));
}

#[test]
fn resolution_serializes_with_scope_tag() {
    let t = tenancy(ResolutionPolicy::Strict);
    let json = serde_json::to_value(t.resolve("/descubrams/guata")).unwrap();
    assert_eq!(json["scope"], "tenant");
    assert_eq!(json["tenant"], "ms");
    assert_eq!(json["prefix"], "/descubrams");

    let json = serde_json::to_value(t.resolve("/")).unwrap();
    assert_eq!(json, serde_json::json!({ "scope": "global" }));
}
