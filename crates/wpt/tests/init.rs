use wpt::domain::config::ApiConfig;
use wpt::domain::tenant::TenantRoute;
use wpt::features::{access::Access, branding::Branding, tenancy::Tenancy};
use wpt::{InitError, init};

#[test]
fn default_config_initializes_every_slice() {
    let slices = init(&ApiConfig::default()).expect("defaults are valid");
    let names: Vec<_> = slices.iter().map(|s| s.name).collect();
    assert_eq!(names, ["tenancy", "branding", "access"]);

    assert!(slices[0].downcast_ref::<Tenancy>().is_some());
    assert!(slices[1].downcast_ref::<Branding>().is_some());
    assert!(slices[2].downcast_ref::<Access>().is_some());
}

#[test]
fn first_failing_slice_is_reported() {
    let mut config = ApiConfig::default();
    config.tenancy.routes.push(TenantRoute::new("ms", "other", "/other"));

    let err = init(&config).unwrap_err();
    assert!(matches!(err, InitError::Tenancy(_)));
}
