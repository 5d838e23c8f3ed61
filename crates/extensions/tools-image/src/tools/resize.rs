use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::{maybe_embed, output_path};

/// Resizes an image by explicit dimensions or a scale factor.
pub struct ResizeTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
    embed_output: bool,
}

impl ResizeTool {
    pub fn new(engine: Arc<dyn ImageEngine>, embed_output: bool) -> Self {
        let spec = &catalog::RESIZE_IMAGE;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
            embed_output,
        }
    }
}

#[async_trait]
impl Tool for ResizeTool {
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
        let width = args.maybe_number(&catalog::WIDTH);
        let height = args.maybe_number(&catalog::HEIGHT);
        let scale = args.maybe_number(&catalog::SCALE);

        if width.is_none() && height.is_none() && scale.is_none() {
            return Err(ToolError::Validation(
                "No resize parameters specified".to_string(),
            ));
        }

        let mut img = self.engine.open(&input)?;
        let (src_w, src_h) = img.dimensions();

        // A scale factor overrides explicit dimensions; a single dimension
        // keeps the source aspect ratio. Every target dimension is rounded
        // and floored at one pixel so fractional input never reaches the
        // engine as zero.
        let pixels = |v: f64| (v.round() as u32).max(1);
        let (target_w, target_h) = match (scale, width, height) {
            (Some(s), _, _) => (pixels(src_w as f64 * s), pixels(src_h as f64 * s)),
            (None, Some(w), Some(h)) => (pixels(w), pixels(h)),
            (None, Some(w), None) => (pixels(w), pixels(w * src_h as f64 / src_w as f64)),
            (None, None, Some(h)) => (pixels(h * src_w as f64 / src_h as f64), pixels(h)),
            (None, None, None) => unreachable!("checked above"),
        };
        debug!(
            input = %input.display(),
            src_w, src_h, target_w, target_h,
            "resizing image"
        );

        img.resize(target_w, target_h);

        let output = output_path(&input, "_resized");
        img.save(&output)?;

        let result = ToolResult::text(format!(
            "Image resized to {}x{} successfully. Output saved to: {}",
            target_w,
            target_h,
            output.display()
        ));
        Ok(maybe_embed(result, self.embed_output, &output))
    }
}
