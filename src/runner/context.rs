//! Execution context for task running
//!
//! The context tracks the settings shared by every command of one run
//! and owns the leveled diagnostic output.

use colored::Colorize;
use std::env;
use std::path::PathBuf;

/// Execution context that tracks state during task execution
pub struct Context {
    /// Directory commands run in
    pub working_dir: PathBuf,

    /// Configuration file path
    pub config_path: Option<PathBuf>,

    /// Shell used to run commands (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

/// Platform default shell
pub fn default_interpreter() -> Vec<String> {
    if cfg!(windows) {
        vec!["cmd".to_string(), "/C".to_string()]
    } else {
        vec!["sh".to_string(), "-c".to_string()]
    }
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_path: None,
            interpreter: default_interpreter(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the configuration file path
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Get the directory for the config file (or the working dir)
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.working_dir.clone())
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[INFO]".cyan(), message);
        }
    }

    /// Print warning message
    pub fn print_warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[WARN]".yellow(), message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[ERROR]".red(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }

    /// Print task start message
    pub fn print_task_start(&self, task_name: &str) {
        self.print_info(&format!("Running task: {}", task_name));
    }

    /// Print task complete message
    pub fn print_task_complete(&self, task_name: &str) {
        self.print_debug(&format!("Task completed: {}", task_name));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
