//! Taskr - a line-based task runner
//!
//! Taskr reads a `taskrfile` describing tasks and environments and runs a
//! requested task after its dependencies, each exactly once.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, TaskrError};

/// Current version of Taskr
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
