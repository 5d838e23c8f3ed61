//! # Pixelforge Protocols
//!
//! Core protocol definitions (traits) for the Pixelforge image tool server.
//! Contains only interface definitions - no image processing.
//!
//! ## Core Traits
//!
//! - [`Tool`] - Trait for tool implementations
//! - [`Extension`] - Base trait for tool-providing extensions

pub mod error;
pub mod extension;
pub mod tool;
pub mod types;

// Re-export core traits
pub use extension::{Extension, ExtensionContext, ExtensionManifest};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use error::{ExtensionError, ToolError};
pub use types::*;
