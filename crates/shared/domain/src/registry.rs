//! Type-erased registry entries for initialized feature slices.
//!
//! Every feature crate (tenancy, branding, access) builds its state once at startup and
//! hands it over as an [`InitializedSlice`]; the HTTP state keys them by [`TypeId`].

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state that can be shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short, stable slice name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }

    /// Borrow the concrete state back out of the registry entry.
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
