pub mod errors;
pub mod logging;
pub mod rebind;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rebind::RebindConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
