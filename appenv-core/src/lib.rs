#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

//! Startup configuration for the service, populated from environment variables.

pub mod config;
pub mod error;

pub use config::{
    ConfigLoader, ConfigSummary, Configuration, EnvSource, FieldOrigin, FieldSummary, ProcessEnv,
    Resolved, RunMode, audit, get_with_default, load, load_from, placeholder_fields,
};
pub use error::ConfigError;
