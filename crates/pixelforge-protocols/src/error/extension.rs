//! Extension-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Extension already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension initialization failed: {0}")]
    InitializationFailed(String),

    #[error("{0}")]
    Custom(String),
}
