//! Error types for the Pixelforge protocol layer.

mod extension;
mod tool;

pub use extension::*;
pub use tool::*;
