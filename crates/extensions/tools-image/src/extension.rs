//! Extension wiring: registers the image tools against a shared engine.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use pixelforge_protocols::error::ExtensionError;
use pixelforge_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use pixelforge_protocols::types::Version;

use crate::catalog;
use crate::engine::{ImageEngine, RasterEngine};
use crate::tools::{
    BinarizeTool, BlurTool, ConvertFormatTool, GrayscaleTool, ImageInfoTool, ModifyColorsTool,
    ResizeTool,
};

/// Provides the image-editing tool set.
pub struct ImageToolsExtension {
    manifest: ExtensionManifest,
    engine: Arc<dyn ImageEngine>,
}

impl ImageToolsExtension {
    pub fn new() -> Self {
        Self::with_engine(Arc::new(RasterEngine::new()))
    }

    /// Swap in an alternate engine, used by tests.
    pub fn with_engine(engine: Arc<dyn ImageEngine>) -> Self {
        let mut manifest = ExtensionManifest::new("tools-image", "Image Tools", Version::new(0, 1, 0));
        manifest.description = "Image editing operations: binarize, blur, convert, grayscale, \
                                info, color modulation, resize"
            .to_string();
        manifest.provides.tools = catalog::OPERATIONS
            .iter()
            .map(|op| op.name.to_string())
            .collect();
        Self { manifest, engine }
    }
}

impl Default for ImageToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for ImageToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let embed_output = ctx.get_config::<bool>("embed_output").unwrap_or(false);
        let engine = Arc::clone(&self.engine);

        let tools: Vec<Arc<dyn pixelforge_protocols::tool::Tool>> = vec![
            Arc::new(BinarizeTool::new(Arc::clone(&engine), embed_output)),
            Arc::new(BlurTool::new(Arc::clone(&engine), embed_output)),
            Arc::new(ConvertFormatTool::new(Arc::clone(&engine), embed_output)),
            Arc::new(GrayscaleTool::new(Arc::clone(&engine), embed_output)),
            Arc::new(ImageInfoTool::new(Arc::clone(&engine))),
            Arc::new(ModifyColorsTool::new(Arc::clone(&engine), embed_output)),
            Arc::new(ResizeTool::new(Arc::clone(&engine), embed_output)),
        ];

        for tool in tools {
            ctx.tool_registry.register_tool(tool)?;
        }

        info!(
            extension = %self.manifest.id,
            tools = self.manifest.provides.tools.len(),
            embed_output,
            "image tools registered"
        );
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_protocols::extension::ToolRegistryAccess;
    use pixelforge_protocols::tool::Tool;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRegistry {
        ids: Mutex<Vec<String>>,
    }

    impl ToolRegistryAccess for RecordingRegistry {
        fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
            self.ids.lock().unwrap().push(tool.definition().id.clone());
            Ok(())
        }

        fn unregister_tool(&self, _tool_id: &str) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_initialize_registers_every_catalog_operation() {
        let registry = Arc::new(RecordingRegistry::default());
        let mut ext = ImageToolsExtension::new();
        let ctx = ExtensionContext::new(
            serde_json::json!({}),
            registry.clone(),
            std::path::PathBuf::from("/tmp"),
        );
        ext.initialize(ctx).await.unwrap();

        let mut registered = registry.ids.lock().unwrap().clone();
        registered.sort();
        let mut expected: Vec<_> = catalog::OPERATIONS
            .iter()
            .map(|op| op.name.to_string())
            .collect();
        expected.sort();
        assert_eq!(registered, expected);
    }

    #[test]
    fn test_manifest_lists_tools() {
        let ext = ImageToolsExtension::new();
        assert_eq!(ext.manifest().id, "tools-image");
        assert_eq!(ext.manifest().provides.tools.len(), 7);
    }
}
