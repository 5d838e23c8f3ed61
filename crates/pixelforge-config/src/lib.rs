//! Configuration management for the Pixelforge server.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, LoggingConfig, ServerConfig, ToolsConfig};
