//! Environment file loading
//!
//! Environment files hold one `KEY=VALUE` pair per line. Lines starting
//! with `#` or `;` are comments. Nothing is exported unless the whole file
//! parses.

use crate::config::read_lines;
use crate::error::{ParseError, ParseResult, Result};
use crate::utils::trim_whitespace;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::Path;

/// Destination for exported variables
pub trait EnvSink {
    fn set_var(&mut self, key: &str, value: &str);
}

/// The environment of the current process, inherited by spawned commands
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set_var(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
    }
}

impl EnvSink for HashMap<String, String> {
    fn set_var(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Parse environment file lines. The last value of a repeated key wins.
pub fn parse_env_lines<I, S>(lines: I, source: &str) -> ParseResult<BTreeMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vars = BTreeMap::new();

    for line in lines {
        let line = line.as_ref();
        // Comment markers only count in the first column
        if line.trim().is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let invalid = || ParseError::InvalidEnvLine {
            file: source.to_string(),
            line: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(invalid)?;
        let key = trim_whitespace(key);
        if key.is_empty() || line.contains('\0') {
            return Err(invalid());
        }

        vars.insert(key.to_string(), trim_whitespace(value).to_string());
    }

    Ok(vars)
}

/// Parse environment file lines and export every pair into `sink`
pub fn load_env<I, S>(
    lines: I,
    source: &str,
    sink: &mut impl EnvSink,
) -> ParseResult<BTreeMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let vars = parse_env_lines(lines, source)?;
    for (key, value) in &vars {
        sink.set_var(key, value);
    }
    Ok(vars)
}

/// Read an environment file and export its pairs into `sink`
pub fn load_env_file(path: &Path, sink: &mut impl EnvSink) -> Result<BTreeMap<String, String>> {
    let lines = read_lines(path)?;
    Ok(load_env(lines, &path.display().to_string(), sink)?)
}
