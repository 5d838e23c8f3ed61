//! # Pixelforge Core
//!
//! Dispatch cycle for the Pixelforge image tool server.
//!
//! ## Components
//!
//! - [`ToolRegistry`] - registry of the available tools
//! - [`Dispatcher`] - resolves an operation name, runs the tool, and builds
//!   the response content sequence

pub mod dispatcher;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use registry::ToolRegistry;
