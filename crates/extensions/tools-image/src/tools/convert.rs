use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::{conversion_path, maybe_embed, normalize_format};

/// Converts an image to a different file format.
pub struct ConvertFormatTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
    embed_output: bool,
}

impl ConvertFormatTool {
    pub fn new(engine: Arc<dyn ImageEngine>, embed_output: bool) -> Self {
        let spec = &catalog::CONVERT_IMAGE_FORMAT;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
            embed_output,
        }
    }
}

#[async_trait]
impl Tool for ConvertFormatTool {
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
        let format = args
            .string("output_format")
            .map(|f| normalize_format(&f))
            .filter(|f| !f.is_empty())
            .ok_or_else(|| ToolError::Validation("No output format provided".to_string()))?;
        let quality = args.number(&catalog::QUALITY) as u8;
        debug!(input = %input.display(), format, quality, "converting image format");

        let mut img = self.engine.open(&input)?;
        img.set_quality(quality);

        let output = conversion_path(&input, &format);
        img.save(&output)?;

        let result = ToolResult::text(format!(
            "Image converted to {} format successfully. Output saved to: {}",
            format,
            output.display()
        ));
        Ok(maybe_embed(result, self.embed_output, &output))
    }
}
