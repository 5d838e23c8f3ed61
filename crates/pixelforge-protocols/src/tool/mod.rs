//! Tool protocol definitions.
//!
//! Tools are the callable units the dispatcher routes invocations to.

mod context;
mod definition;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use result::*;
pub use traits::*;
