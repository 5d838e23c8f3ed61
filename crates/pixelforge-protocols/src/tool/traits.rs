//! Tool trait definition.

use async_trait::async_trait;

use super::{ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;

/// Core trait for tools.
///
/// Tools are the executable units the dispatcher routes named invocations
/// to. Each tool owns exactly one delegated pipeline against the image
/// engine.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given raw argument bag.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Validate the parameter shape before execution.
    ///
    /// Out-of-range values are never rejected here; range repair is the
    /// normalizer's job inside `execute`. This only rejects bags that are
    /// not objects at all.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        let definition = self.definition();
        if let Some(schema) = &definition.parameters_schema {
            if schema.get("type") == Some(&serde_json::json!("object"))
                && !params.is_object()
                && !params.is_null()
            {
                return Err(ToolError::InvalidParameters(
                    "Parameters must be an object".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct MockTool {
        definition: ToolDefinition,
    }

    impl MockTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("mock_tool", "Mock Tool", "A mock tool"),
            }
        }

        fn with_schema(schema: serde_json::Value) -> Self {
            Self {
                definition: ToolDefinition::new("mock_tool", "Mock Tool", "A mock tool")
                    .with_parameters_schema(schema),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::text("executed"))
        }
    }

    #[test]
    fn test_validate_no_schema() {
        let tool = MockTool::new();
        assert!(tool.validate(&serde_json::json!({"key": "value"})).is_ok());
    }

    #[test]
    fn test_validate_object_schema_accepts_object() {
        let tool = MockTool::with_schema(serde_json::json!({"type": "object"}));
        assert!(tool.validate(&serde_json::json!({})).is_ok());
    }

    #[test]
    fn test_validate_object_schema_accepts_null() {
        // A call with no arguments at all still dispatches; the normalizer
        // reports the missing image path with its own message.
        let tool = MockTool::with_schema(serde_json::json!({"type": "object"}));
        assert!(tool.validate(&serde_json::Value::Null).is_ok());
    }

    #[test]
    fn test_validate_object_schema_rejects_array() {
        let tool = MockTool::with_schema(serde_json::json!({"type": "object"}));
        let result = tool.validate(&serde_json::json!([1, 2, 3]));
        assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    }

    #[tokio::test]
    async fn test_execute() {
        let tool = MockTool::new();
        let ctx = ToolContext::new(PathBuf::from("/tmp"));
        let result = tool.execute(serde_json::json!({}), ctx).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content[0].as_text(), "executed");
    }
}
