//! Tool execution errors.

use thiserror::Error;

/// Errors surfaced by tool dispatch and execution.
///
/// `Validation` and `ExecutionFailed` carry complete, caller-facing messages;
/// the response builder prefixes them with `Error:` without adding its own
/// wording, so the text the caller sees is exactly what the tool produced.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Validation error for a missing image path.
    pub fn no_image_path() -> Self {
        ToolError::Validation("No image path provided".to_string())
    }

    /// Validation error for a path that does not exist on disk.
    pub fn image_not_found(path: &str) -> Self {
        ToolError::Validation(format!("Image file not found at {path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ToolError::NotFound("sharpen_image".to_string());
        assert!(err.to_string().contains("Unknown tool"));
        assert!(err.to_string().contains("sharpen_image"));
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = ToolError::Validation("No image path provided".to_string());
        assert_eq!(err.to_string(), "No image path provided");
    }

    #[test]
    fn test_execution_failed_display_is_bare_message() {
        let err = ToolError::ExecutionFailed("Failed to load image: bad header".to_string());
        assert_eq!(err.to_string(), "Failed to load image: bad header");
    }

    #[test]
    fn test_no_image_path() {
        assert_eq!(
            ToolError::no_image_path().to_string(),
            "No image path provided"
        );
    }

    #[test]
    fn test_image_not_found() {
        assert_eq!(
            ToolError::image_not_found("/tmp/missing.png").to_string(),
            "Image file not found at /tmp/missing.png"
        );
    }

    #[test]
    fn test_invalid_parameters_display() {
        let err = ToolError::InvalidParameters("missing field".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }
}
