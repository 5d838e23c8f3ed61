//! Extension trait definition.

use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;

use super::{ExtensionContext, ExtensionManifest};
use crate::error::ExtensionError;

/// Core trait for all extensions.
///
/// An extension provides metadata about itself (via manifest) and registers
/// its tools during initialization.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Initialize the extension with the given context.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;

    /// Shutdown the extension.
    async fn shutdown(&self) -> Result<(), ExtensionError> {
        Ok(())
    }

    /// Returns a reference to the extension as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Trait for accessing the tool registry from extensions.
pub trait ToolRegistryAccess: Send + Sync {
    /// Register a tool.
    fn register_tool(&self, tool: Arc<dyn crate::tool::Tool>) -> Result<(), ExtensionError>;

    /// Unregister a tool.
    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError>;
}
