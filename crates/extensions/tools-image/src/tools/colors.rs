use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::{maybe_embed, output_path};

/// Modulates brightness, saturation, and hue.
pub struct ModifyColorsTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
    embed_output: bool,
}

impl ModifyColorsTool {
    pub fn new(engine: Arc<dyn ImageEngine>, embed_output: bool) -> Self {
        let spec = &catalog::MODIFY_COLORS;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
            embed_output,
        }
    }
}

#[async_trait]
impl Tool for ModifyColorsTool {
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
        let brightness = args.number(&catalog::BRIGHTNESS);
        let saturation = args.number(&catalog::SATURATION);
        let hue_shift = args.number(&catalog::HUE_SHIFT);
        debug!(
            input = %input.display(),
            brightness, saturation, hue_shift,
            "modulating image colors"
        );

        // The engine takes hue as a 0-200 percentage where 100 is neutral
        // and the span maps to a rotation of -180 to +180 degrees.
        let hue = 100.0 + hue_shift * 100.0 / 360.0;

        let mut img = self.engine.open(&input)?;
        img.modulate(brightness, saturation, hue);

        let output = output_path(&input, "_color_modified");
        img.save(&output)?;

        let result = ToolResult::text(format!(
            "Image colors modified successfully. Output saved to: {}",
            output.display()
        ));
        Ok(maybe_embed(result, self.embed_output, &output))
    }
}
