//! Task execution engine
//!
//! This module handles environment loading, command running, and
//! dependency resolution.

pub mod command;
pub mod context;
pub mod environment;
pub mod executor;

// Re-export main types
pub use command::*;
pub use context::*;
pub use environment::*;
pub use executor::*;
