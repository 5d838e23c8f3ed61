use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::{maybe_embed, output_path};

/// Applies a gaussian blur.
pub struct BlurTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
    embed_output: bool,
}

impl BlurTool {
    pub fn new(engine: Arc<dyn ImageEngine>, embed_output: bool) -> Self {
        let spec = &catalog::BLUR_IMAGE;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
            embed_output,
        }
    }
}

#[async_trait]
impl Tool for BlurTool {
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
        let radius = args.number(&catalog::RADIUS);
        let sigma = args.number(&catalog::SIGMA);
        debug!(input = %input.display(), radius, sigma, "blurring image");

        let mut img = self.engine.open(&input)?;
        img.blur(radius, sigma);

        let output = output_path(&input, "_blurred");
        img.save(&output)?;

        let result = ToolResult::text(format!(
            "Image blurred successfully. Output saved to: {}",
            output.display()
        ));
        Ok(maybe_embed(result, self.embed_output, &output))
    }
}
