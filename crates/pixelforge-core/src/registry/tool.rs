//! Tool registry for managing available tools.

use std::sync::Arc;

use pixelforge_protocols::error::ExtensionError;
use pixelforge_protocols::extension::ToolRegistryAccess;
use pixelforge_protocols::tool::{Tool, ToolDefinition};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Tool {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry for managing tools.
pub struct ToolRegistry {
    inner: BaseRegistry<dyn Tool>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a tool.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.inner.register(tool)
    }

    /// Unregister a tool.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id)
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.inner.get(id)
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.inner.iter().map(|t| t.definition().clone()).collect()
    }

    /// List all tool IDs, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.inner.list_ids();
        names.sort();
        names
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.register(tool)
    }

    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError> {
        self.unregister(tool_id)
    }
}
