//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub tools: ToolsConfig,
}

/// Transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Transport type. Only `stdio` is supported.
    pub transport: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for rolling log files. Defaults to `~/.pixelforge/debug`.
    pub dir: Option<String>,

    /// Default log level when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log directory.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(crate::ConfigLoader::expand_path(dir)),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pixelforge")
                .join("debug"),
        }
    }
}

/// Image tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// When true, successful responses also embed the output image inline
    /// as base64. Path-only responses are the default contract.
    pub embed_output: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            embed_output: false,
        }
    }
}
