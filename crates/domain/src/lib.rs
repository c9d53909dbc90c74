//! Rebind DNS Domain Layer
pub mod config;
pub mod intent;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RebindConfig, ServerConfig};
pub use intent::QueryIntent;
