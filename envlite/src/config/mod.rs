//! Unified configuration layer.
//!
//! All environment variable reads are centralized here; business code goes
//! through the structured configs instead of raw `std::env::var`.
//!
//! - `loader`: env_or / env_optional / env_bool helpers, dotenv loading,
//!   and the centralized set/remove wrappers
//! - `schema`: InterpreterConfig, ObservabilityConfig
//! - `env_keys`: key constants and alias chains

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv, remove_env_var, set_env_var};
pub use schema::{ConfigError, InterpreterConfig, ObservabilityConfig};
