//! Error types for Taskr

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Taskr operations
pub type Result<T> = std::result::Result<T, TaskrError>;

/// Main error type for Taskr
#[derive(Error, Debug)]
pub enum TaskrError {
    /// Malformed command line invocation
    #[error("Wrong command format: {0}")]
    Argument(String),

    /// Configuration file discovery errors
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Grammar or validation errors in a taskrfile or environment file
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A requested task, alias or environment does not exist
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// I/O errors
    #[error("Unexpected error: {0}")]
    Io(#[from] io::Error),
}

impl TaskrError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TaskrError::Argument(_) => 1,
            TaskrError::Config(_) | TaskrError::Parse(_) | TaskrError::Lookup(_) => 2,
            TaskrError::Io(_) => 3,
        }
    }

    /// Whether usage help should be printed along with this error
    pub fn shows_usage(&self) -> bool {
        matches!(self, TaskrError::Argument(_))
    }
}

/// Configuration file discovery errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: no \"{0}\" found")]
    NotFound(String),

    #[error("Multiple configurations found: {0}")]
    MultipleConfigs(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

/// Taskrfile and environment file parse errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("No block headers found")]
    NoBlockHeaders,

    #[error("Task '{0}' is defined more than once")]
    DuplicateTask(String),

    #[error("Alias '{alias}' cannot be the same as the task name '{task}'")]
    AliasIsTaskName { alias: String, task: String },

    #[error("Alias '{0}' is used more than once or is a task")]
    DuplicateAlias(String),

    #[error("Task '{0}' is missing required key: 'run'")]
    MissingRun(String),

    #[error("Dependency '{dependency}' of task '{task}' could not be resolved")]
    UnresolvedDependency { dependency: String, task: String },

    #[error("Environment '{0}' is defined more than once")]
    DuplicateEnvironment(String),

    #[error("Environment '{0}' is missing required key: 'file'")]
    MissingFile(String),

    #[error("More than 1 default environment found")]
    MultipleDefaultEnvironments,

    #[error("Invalid line format in environment file: '{file}': {line}")]
    InvalidEnvLine { file: String, line: String },
}

/// Name resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Task or alias '{0}' not found")]
    TaskNotFound(String),

    #[error("No environment '{0}' found in config")]
    EnvironmentNotFound(String),

    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),
}

/// Specialized result type for config discovery
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for name resolution
pub type LookupResult<T> = std::result::Result<T, LookupError>;
