//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory with a taskrfile
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("taskrfile");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// The taskr binary running in `dir`, with HOME pointed at `dir` so no
/// global config leaks in
pub fn taskr_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskr").unwrap();
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    cmd
}

/// Read a file written by a task, trimming trailing whitespace
pub fn read_output(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap().trim_end().to_string()
}
