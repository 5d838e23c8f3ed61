use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::{maybe_embed, output_path};

/// Converts an image to grayscale and applies a binary threshold.
pub struct BinarizeTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
    embed_output: bool,
}

impl BinarizeTool {
    pub fn new(engine: Arc<dyn ImageEngine>, embed_output: bool) -> Self {
        let spec = &catalog::BINARIZE_IMAGE;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
            embed_output,
        }
    }
}

#[async_trait]
impl Tool for BinarizeTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let args = RawArgs::new(params);
        let input = args.image_path()?;
        let threshold = args.number(&catalog::THRESHOLD);
        debug!(input = %input.display(), threshold, "binarizing image");

        let mut img = self.engine.open(&input)?;
        img.grayscale();
        img.threshold(threshold);

        let output = output_path(&input, "_binarized");
        img.save(&output)?;

        let result = ToolResult::text(format!(
            "Image binarized successfully. Output saved to: {}",
            output.display()
        ));
        Ok(maybe_embed(result, self.embed_output, &output))
    }
}
