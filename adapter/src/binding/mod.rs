//! Binding module

pub mod binder;
pub mod secret_ref;
pub mod topology;

pub use binder::Binder;
