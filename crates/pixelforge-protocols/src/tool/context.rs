//! Tool execution context.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Context for tool execution.
///
/// One context is created per dispatch cycle; tools that need nothing from
/// it simply ignore it.
#[derive(Clone)]
pub struct ToolContext {
    /// Correlation ID for tracing.
    pub correlation_id: String,

    /// Working directory for file operations.
    pub work_dir: PathBuf,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            work_dir,
            data: HashMap::new(),
        }
    }

    /// Get a value from the context data.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the context data.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.into(), v);
        }
    }
}
