//! Configuration structs grouped by domain, loaded from environment
//! variables with unified fallback logic.

use anyhow::Context;
use thiserror::Error;

use crate::env::Environment;

use super::env_keys::{interpreter as interp_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or, load_dotenv};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid python version spec '{0}': expected MAJOR.MINOR[.MICRO]")]
    InvalidVersion(String),
}

/// Interpreter environment selection.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Root of the environment (`ENVLITE_ENV_ROOT`, or `VIRTUAL_ENV`)
    pub env_root: Option<String>,
    /// Dotted version spec (`ENVLITE_PYTHON_VERSION`)
    pub version: Option<String>,
}

impl InterpreterConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            env_root: env_optional(interp_keys::ENV_ROOT, interp_keys::ENV_ROOT_ALIASES),
            version: env_optional(
                interp_keys::PYTHON_VERSION,
                interp_keys::PYTHON_VERSION_ALIASES,
            ),
        }
    }

    /// Parse the dotted version spec ("3.9", "3.11.4") into components.
    /// Unset means an empty version, which the descriptor accepts in its
    /// degraded form.
    pub fn version_info(&self) -> Result<Vec<u32>, ConfigError> {
        let Some(ref spec) = self.version else {
            return Ok(Vec::new());
        };
        spec.split('.')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| ConfigError::InvalidVersion(spec.clone()))
    }

    /// Build an [`Environment`] when an env root is configured.
    pub fn environment(&self) -> anyhow::Result<Option<Environment>> {
        let Some(ref root) = self.env_root else {
            return Ok(None);
        };
        let version_info = self
            .version_info()
            .with_context(|| format!("parse {}", interp_keys::PYTHON_VERSION))?;
        Ok(Some(Environment::new(root, version_info)))
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            quiet: env_bool(obv_keys::QUIET, &[], false),
            log_level: env_or(obv_keys::LOG_LEVEL, &[], || "envlite=info".to_string()),
            log_json: env_bool(obv_keys::LOG_JSON, &[], false),
        }
    }
}
