//! Image operation tools.

mod binarize;
mod blur;
mod colors;
mod convert;
mod grayscale;
mod info;
mod resize;
mod util;

pub use binarize::*;
pub use blur::*;
pub use colors::*;
pub use convert::*;
pub use grayscale::*;
pub use info::*;
pub use resize::*;
pub use util::*;
