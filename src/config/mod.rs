//! Configuration module for schemagen.
//!
//! Holds the generator configuration, its TOML loader, and the error type
//! every phase uses to report malformed or dangling configuration.

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{expand_env_vars, GeneratorConfig, CONFIG_ENV_VAR};
