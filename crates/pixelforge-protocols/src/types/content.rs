//! Response content types.
//!
//! A tool invocation answers with an ordered sequence of content blocks:
//! text blocks always, and optionally an inline base64 image block when the
//! embed-output response mode is enabled.

use serde::{Deserialize, Serialize};

/// A single block in a tool response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        source: ImageSource,
    },
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Create an inline base64 image block.
    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ContentBlock::Image {
            source: ImageSource::Base64 {
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }

    /// The text of this block, empty for non-text blocks.
    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
            _ => "",
        }
    }
}

/// Source of an inline image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}
