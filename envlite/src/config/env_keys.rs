//! Environment variable key constants and alias chains.
//!
//! Primary variables use `ENVLITE_*`; conventional interop aliases (e.g.
//! `VIRTUAL_ENV`, set by venv activation scripts) are honored as fallbacks.

/// Interpreter environment selection
pub mod interpreter {
    pub const ENV_ROOT: &str = "ENVLITE_ENV_ROOT";
    pub const ENV_ROOT_ALIASES: &[&str] = &["VIRTUAL_ENV"];

    /// Dotted version spec, e.g. "3.9" or "3.11.4"
    pub const PYTHON_VERSION: &str = "ENVLITE_PYTHON_VERSION";
    pub const PYTHON_VERSION_ALIASES: &[&str] = &[];
}

/// Observability and logging
pub mod observability {
    pub const QUIET: &str = "ENVLITE_QUIET";

    pub const LOG_LEVEL: &str = "ENVLITE_LOG_LEVEL";

    pub const LOG_JSON: &str = "ENVLITE_LOG_JSON";
}
