use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use pixelforge_protocols::error::ToolError;
use pixelforge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::args::RawArgs;
use crate::catalog;
use crate::engine::ImageEngine;
use crate::tools::util::format_size;

/// Reports image metadata without producing an output file.
pub struct ImageInfoTool {
    definition: ToolDefinition,
    engine: Arc<dyn ImageEngine>,
}

impl ImageInfoTool {
    pub fn new(engine: Arc<dyn ImageEngine>) -> Self {
        let spec = &catalog::GET_IMAGE_INFO;
        Self {
            definition: ToolDefinition::new(spec.name, spec.title, spec.description)
                .with_parameters_schema(spec.input_schema()),
            engine,
        }
    }
}

#[async_trait]
impl Tool for ImageInfoTool {
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
        debug!(input = %input.display(), "reading image info");

        let img = self.engine.open(&input)?;
        let meta = img.metadata();
        let file_size = std::fs::metadata(&input)?.len();

        let mut lines = vec![
            "Image Information:".to_string(),
            format!("Format: {}", meta.format),
            format!("Dimensions: {}x{} pixels", meta.width, meta.height),
            format!("Color depth: {}-bit", meta.depth),
            format!("Colorspace: {}", meta.colorspace),
            format!("Compression: {}", meta.compression),
            format!("File size: {}", format_size(file_size)),
        ];
        // The line is omitted when the backend has no DPI metadata.
        if let Some((x, y)) = meta.resolution {
            lines.push(format!("Resolution: {x}x{y} DPI"));
        }
        lines.push(format!(
            "Alpha channel: {}",
            if meta.alpha { "yes" } else { "no" }
        ));
        lines.push(format!("Image type: {}", meta.image_type));

        Ok(ToolResult::text(lines.join("\n")))
    }
}
