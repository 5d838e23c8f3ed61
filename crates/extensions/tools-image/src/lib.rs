//! Image editing tools for Pixelforge.
//!
//! Exposes seven image operations as tools behind the dispatch protocol:
//!
//! - `binarize_image` - grayscale then threshold
//! - `blur_image` - gaussian blur
//! - `convert_image_format` - re-encode under a new format
//! - `grayscale_image` - grayscale conversion
//! - `get_image_info` - metadata report, no output file
//! - `modify_colors` - brightness/saturation/hue modulation
//! - `resize_image` - resize by dimensions or scale factor
//!
//! All pixel work is delegated through the [`engine::ImageEngine`] seam;
//! this crate's own logic is argument normalization and pipeline wiring.

pub mod args;
pub mod catalog;
pub mod engine;
mod extension;
mod tools;

pub use extension::ImageToolsExtension;
pub use tools::*;
