//! Tool execution result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{ContentBlock, Metadata};

/// Result of a tool execution.
///
/// Carries the ordered content blocks that become the response. An error
/// result holds the bare error description; the dispatcher adds the
/// `Error:` prefix when it builds the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Ordered output content blocks.
    pub content: Vec<ContentBlock>,

    /// Error description if execution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Additional metadata about the execution.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ToolResult {
    /// Create a successful result with a single text block.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            success: true,
            content: vec![ContentBlock::text(message)],
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// Create an error result.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: Vec::new(),
            error: Some(error.into()),
            metadata: HashMap::new(),
        }
    }

    /// Append a content block.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
