//! Extension protocol definitions.
//!
//! Extensions bundle related tools and register them at startup.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
