//! Configuration file discovery

use crate::error::{ConfigError, ConfigResult, Result};
use crate::utils::to_lowercase;
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file, matched case-insensitively
pub const CONFIG_FILE_NAME: &str = "taskrfile";

/// Where the configuration file was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,

    /// True when the file came from the global config directory
    pub global: bool,
}

/// Directory searched when the current directory has no taskrfile
pub fn global_config_dir() -> ConfigResult<PathBuf> {
    let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
    Ok(dirs.home_dir().join(".config").join("taskr"))
}

/// Names of regular files in `dir` whose lowercase name equals `target`
pub fn find_case_insensitive_files(target: &str, dir: &Path) -> Result<Vec<String>> {
    let target = to_lowercase(target);
    let mut matches = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(matches),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        // Follows symlinks, so a linked taskrfile still counts
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if to_lowercase(&file_name) == target {
            matches.push(file_name);
        }
    }

    matches.sort();
    Ok(matches)
}

/// Find the single taskrfile in `dir`, if any
fn find_unique_in(dir: &Path) -> Result<Option<PathBuf>> {
    let mut matches = find_case_insensitive_files(CONFIG_FILE_NAME, dir)?;
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop().map(|name| dir.join(name))),
        _ => Err(ConfigError::MultipleConfigs(format!(
            "case-insensitive match to \"{}\" in {}: {}",
            CONFIG_FILE_NAME,
            dir.display(),
            matches.join(", ")
        ))
        .into()),
    }
}

/// Find the configuration file starting from a specific directory,
/// falling back to the global directory
pub fn find_config_file_from(start_dir: &Path, global_dir: &Path) -> Result<ConfigLocation> {
    if let Some(path) = find_unique_in(start_dir)? {
        return Ok(ConfigLocation {
            path,
            global: false,
        });
    }

    match find_unique_in(global_dir)? {
        Some(path) => Ok(ConfigLocation { path, global: true }),
        None => Err(ConfigError::NotFound(CONFIG_FILE_NAME.to_string()).into()),
    }
}

/// Find the configuration file for the current directory
pub fn find_config_file() -> Result<ConfigLocation> {
    let current_dir = env::current_dir()?;
    find_config_file_from(&current_dir, &global_config_dir()?)
}
