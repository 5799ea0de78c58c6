//! Terminal output for listings and errors

use crate::config::Config;
use crate::error::TaskrError;
use colored::Colorize;
use std::fmt::Write;

/// Render the task and environment listing
pub fn format_config(config: &Config) -> String {
    let mut out = String::new();

    if config.is_empty() {
        out.push_str("Config file is empty\n");
        return out;
    }

    if !config.tasks.is_empty() {
        let width = config.tasks.keys().map(|n| n.chars().count()).max().unwrap_or(0);
        out.push_str("Tasks:\n");
        for task in config.tasks.values() {
            let line = format!("  {:<width$}    {}", task.name, task.desc, width = width);
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    if !config.environments.is_empty() {
        if !config.tasks.is_empty() {
            out.push('\n');
        }
        let width = config.environments.keys().map(|n| n.chars().count()).max().unwrap_or(0);
        out.push_str("Environments:\n");
        for env in config.environments.values() {
            let marker = if env.is_default { "* " } else { "  " };
            let _ = writeln!(
                out,
                "{}{:<width$}    {}",
                marker,
                env.name,
                env.file,
                width = width
            );
        }
    }

    out
}

/// Print the task and environment listing to stdout
pub fn print_config(config: &Config) {
    print!("{}", format_config(config));
}

/// Print an error with the standard prefix to stderr
pub fn print_error(err: &TaskrError) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
