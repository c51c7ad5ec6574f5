//! envlite — scoped activation of isolated Python runtime environments.
//!
//! An [`Environment`] describes an installed environment root plus an
//! interpreter version, and derives the module search path entries and
//! binary directory for that environment. Activating it overlays those
//! paths onto a [`ProcessPaths`] for the lifetime of an [`ActivationGuard`];
//! the prior state is restored when the guard drops, on normal exit and
//! unwind alike.

pub mod config;
pub mod env;
pub mod observability;

pub use env::{ActivationGuard, Environment, ProcessPaths, PATH_SEPARATOR};
