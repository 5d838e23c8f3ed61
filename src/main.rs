//! Pixelforge - Image editing tool server
//!
//! Main entry point for the Pixelforge CLI and stdio server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pixelforge_config::{Config, ConfigLoader};

mod server;

/// Pixelforge CLI.
#[derive(Parser)]
#[command(name = "pixelforge")]
#[command(about = "Image editing tool server")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    config: PathBuf,

    /// Working directory
    #[arg(short, long, global = true)]
    work_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tool calls over stdio (default)
    Serve,

    /// Print the advertised tool catalog as JSON and exit
    Tools,
}

/// Initialize tracing with console and file output.
///
/// Console output goes to stderr so it never interleaves with the stdio
/// protocol on stdout. Log files rotate daily in the configured directory.
fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = config.logging.resolved_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("pixelforge")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer guard alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::registry()
        .with(env_filter)
        // Console layer on stderr (stdout carries protocol responses)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        // File layer (text format without colors)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config)?;

    let work_dir = match cli.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        None | Some(Commands::Serve) => {
            info!("Starting Pixelforge v{}", env!("CARGO_PKG_VERSION"));
            info!("Working directory: {}", work_dir.display());
            server::run_server(work_dir, config).await
        }
        Some(Commands::Tools) => {
            let dispatcher = server::build_dispatcher(&config, &work_dir).await?;
            let catalog = serde_json::to_string_pretty(&dispatcher.catalog())?;
            println!("{catalog}");
            Ok(())
        }
    }
}
