#![cfg(feature = "server")]

use std::any::Any;
use wpt_kernel::domain::config::ApiConfig;
use wpt_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use wpt_kernel::server::{ApiState, ApiStateError};

#[derive(Debug)]
struct Marker;

impl FeatureSlice for Marker {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Marker))
        .build()
        .expect("state");

    assert!(state.get_slice::<Marker>().is_some());
    assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["marker"]);
}

#[test]
fn missing_slice_names_the_type() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let err = state.try_get_slice::<Marker>().unwrap_err();
    assert!(err.to_string().contains("Marker"));
}
