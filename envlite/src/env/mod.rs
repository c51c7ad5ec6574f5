//! Isolated Python runtime environments: path derivation and scoped
//! activation.
//!
//! Callers hold a [`ProcessPaths`] (the process-wide search state) and pass
//! it to [`Environment::activate`]; the returned guard owns the overlay and
//! restores the prior state on drop.

pub mod activation;
pub mod environment;

pub use activation::{ActivationGuard, ProcessPaths, PATH_SEPARATOR};
pub use environment::Environment;
