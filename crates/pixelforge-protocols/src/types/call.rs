//! Inbound call and outbound response envelopes.

use serde::{Deserialize, Serialize};

use super::ContentBlock;

/// A named tool invocation with its loosely-typed argument bag.
///
/// Created once per incoming call and consumed by the dispatch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Operation name, e.g. `binarize_image`.
    pub name: String,

    /// Raw argument bag. Callers are inconsistent about shape; the
    /// normalization layer in the tools crate repairs it.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// The ordered content sequence answering a [`ToolCall`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub is_error: bool,
}

impl ToolResponse {
    /// Build a success response from content blocks.
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Build an error response with a single `Error:`-prefixed text block.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentBlock::text(format!("Error: {message}"))],
            is_error: true,
        }
    }

    /// Concatenated text of all text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(ContentBlock::as_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_without_arguments_deserializes() {
        let call: ToolCall = serde_json::from_str(r#"{"name": "grayscale_image"}"#).unwrap();
        assert_eq!(call.name, "grayscale_image");
        assert!(call.arguments.is_null());
    }

    #[test]
    fn test_call_with_arguments() {
        let call: ToolCall =
            serde_json::from_str(r#"{"name": "blur_image", "arguments": {"sigma": 2}}"#).unwrap();
        assert_eq!(call.arguments["sigma"], 2);
    }

    #[test]
    fn test_error_response_prefix() {
        let resp = ToolResponse::error("No image path provided");
        assert!(resp.is_error);
        assert_eq!(resp.text(), "Error: No image path provided");
    }

    #[test]
    fn test_success_response_text() {
        let resp = ToolResponse::new(vec![
            ContentBlock::text("first"),
            ContentBlock::image("image/png", "aGVsbG8="),
            ContentBlock::text("second"),
        ]);
        assert!(!resp.is_error);
        assert_eq!(resp.text(), "first\nsecond");
    }
}
