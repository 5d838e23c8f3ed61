//! Operation dispatch and response building.

use std::sync::Arc;

use tracing::{info, warn};

use pixelforge_protocols::tool::ToolContext;
use pixelforge_protocols::types::{ToolCall, ToolResponse};

use crate::registry::ToolRegistry;

/// Resolves an operation name to a registered tool, runs it, and maps the
/// outcome into the response content sequence.
///
/// Every path through `dispatch` yields a well-formed response; a failed
/// invocation is reported to the caller, never propagated as a process
/// error.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a tool registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The advertised tool catalog, sorted by operation name.
    ///
    /// Entries are generated from the same definitions dispatch consults,
    /// so the catalog cannot drift from dispatch-time behavior.
    pub fn catalog(&self) -> Vec<serde_json::Value> {
        let mut definitions = self.registry.list();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
            .iter()
            .map(|d| d.to_catalog_entry())
            .collect()
    }

    /// Run one dispatch cycle for an incoming call.
    pub async fn dispatch(&self, call: ToolCall, ctx: ToolContext) -> ToolResponse {
        let Some(tool) = self.registry.get(&call.name) else {
            warn!(tool = %call.name, "unknown tool requested");
            return ToolResponse::error(format!(
                "Unknown tool: {}. Valid tools: {}",
                call.name,
                self.registry.names().join(", ")
            ));
        };

        if let Err(err) = tool.validate(&call.arguments) {
            warn!(tool = %call.name, %err, "parameter shape rejected");
            return ToolResponse::error(err);
        }

        info!(tool = %call.name, correlation_id = %ctx.correlation_id, "dispatching");

        match tool.execute(call.arguments, ctx).await {
            Ok(result) if result.success => ToolResponse::new(result.content),
            Ok(result) => {
                let message = result.error.unwrap_or_else(|| "unspecified failure".to_string());
                warn!(tool = %call.name, %message, "tool reported failure");
                ToolResponse::error(message)
            }
            Err(err) => {
                warn!(tool = %call.name, %err, "tool execution failed");
                ToolResponse::error(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
