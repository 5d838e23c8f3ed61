//! Stdio server: one JSON request per line in, one JSON response per line out.

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use pixelforge_config::Config;
use pixelforge_core::{Dispatcher, ToolRegistry};
use pixelforge_protocols::extension::{Extension, ExtensionContext};
use pixelforge_protocols::tool::ToolContext;
use pixelforge_protocols::types::{ContentBlock, ToolCall, ToolResponse};
use pixelforge_tools_image::ImageToolsExtension;

/// One inbound request line.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Request {
    /// Run a named tool.
    CallTool {
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    },

    /// Return the advertised tool catalog.
    ListTools,
}

/// One outbound response line.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Response {
    ToolResult {
        content: Vec<ContentBlock>,
        is_error: bool,
    },
    ToolList {
        tools: Vec<serde_json::Value>,
    },
}

impl From<ToolResponse> for Response {
    fn from(resp: ToolResponse) -> Self {
        Response::ToolResult {
            content: resp.content,
            is_error: resp.is_error,
        }
    }
}

/// Build the dispatcher with every extension initialized.
pub(crate) async fn build_dispatcher(
    config: &Config,
    work_dir: &Path,
) -> Result<Dispatcher, Box<dyn std::error::Error>> {
    let tool_registry = Arc::new(ToolRegistry::new());

    let ctx = ExtensionContext::new(
        serde_json::to_value(&config.tools)?,
        tool_registry.clone(),
        work_dir.to_path_buf(),
    );

    let mut image_ext = ImageToolsExtension::new();
    image_ext.initialize(ctx).await?;
    info!(
        "Registered image tools: {:?}",
        image_ext.manifest().provides.tools
    );

    Ok(Dispatcher::new(tool_registry))
}

/// Run the stdio serve loop until stdin closes.
pub(crate) async fn run_server(
    work_dir: PathBuf,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = build_dispatcher(&config, &work_dir).await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    info!("Serving on stdio");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&dispatcher, &work_dir, &line).await;
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("Stdin closed, shutting down");
    Ok(())
}

/// Handle one request line. Every outcome, including a malformed line,
/// becomes a response; the serve loop never exits on an invocation failure.
async fn handle_line(dispatcher: &Dispatcher, work_dir: &Path, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            warn!(%err, "malformed request line");
            return ToolResponse::error(format!("Invalid request: {err}")).into();
        }
    };

    match request {
        Request::ListTools => Response::ToolList {
            tools: dispatcher.catalog(),
        },
        Request::CallTool { name, arguments } => {
            let call = ToolCall::new(name, arguments);
            let ctx = ToolContext::new(work_dir.to_path_buf());
            dispatcher.dispatch(call, ctx).await.into()
        }
    }
}
