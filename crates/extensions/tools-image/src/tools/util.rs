//! Shared helpers for output naming and response embedding.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use pixelforge_protocols::tool::ToolResult;
use pixelforge_protocols::types::ContentBlock;

/// Output path for a transforming operation: the suffix is appended to the
/// stem, the extension and directory stay those of the input.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    let ext = input
        .extension()
        .and_then(OsStr::to_str)
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}{ext}"))
}

/// Output path for a format conversion: same stem, new extension.
pub fn conversion_path(input: &Path, format: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    input.with_file_name(format!("{stem}.{format}"))
}

/// Normalize a requested format string: trim, strip stray dots, lowercase.
/// `"JPG."` becomes `jpg`.
pub fn normalize_format(raw: &str) -> String {
    raw.trim().trim_matches('.').to_lowercase()
}

/// MIME type for an output file, derived from its extension. JPEG is the
/// fallback for anything unrecognized.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(OsStr::to_str)
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "image/jpeg",
    }
}

/// Human-readable file size: bytes below 1024, then KB, then MB, with one
/// decimal place.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KB {
        format!("{bytes} bytes")
    } else if bytes_f < MB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{:.1} MB", bytes_f / MB)
    }
}

/// Append an inline base64 image block when the embed-output response mode
/// is on. An unreadable output is logged and skipped rather than turning a
/// completed operation into a failure.
pub fn maybe_embed(result: ToolResult, embed: bool, output: &Path) -> ToolResult {
    if !embed {
        return result;
    }
    match std::fs::read(output) {
        Ok(data) => {
            use base64::Engine;
            let encoded = base64::engine::general_purpose::STANDARD.encode(data);
            result.with_block(ContentBlock::image(mime_for_path(output), encoded))
        }
        Err(e) => {
            debug!(path = %output.display(), error = %e, "skipping inline embed");
            result
        }
    }
}
