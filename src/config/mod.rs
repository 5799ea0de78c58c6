//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of taskrfile configuration
//! files and validation of their blocks.

pub mod locate;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use locate::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
