//! Common types used across the Pixelforge server.

mod call;
mod common;
mod content;

pub use call::*;
pub use common::*;
pub use content::*;
