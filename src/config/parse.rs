//! Taskrfile parsing
//!
//! The grammar is line based. A header opens a block, indented
//! `key = value` lines fill it, and the block is validated when the next
//! header or the end of input is reached.

use crate::config::schema::NameRegistry;
use crate::config::types::{Config, Environment, Task};
use crate::error::{ConfigError, ParseError, ParseResult, Result, TaskrError};
use crate::utils::{is_comment, strip_inline_comment, trim_whitespace};
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static TASK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*task\s+([a-zA-Z_][a-zA-Z0-9_-]*)\s*:").expect("valid regex"));

static ENV_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(default\s+)?env\s+([a-zA-Z_][a-zA-Z0-9_-]*)\s*:").expect("valid regex")
});

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]+([a-zA-Z_][a-zA-Z0-9_-]*)\s*=(.*)$").expect("valid regex"));

/// Scanner state. The block being filled travels with the state.
#[derive(Debug)]
enum State {
    Start,
    InTask(Task),
    InEnvironment(Environment),
}

/// A single classified line
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    TaskHeader(&'a str),
    EnvHeader { name: &'a str, default: bool },
    KeyValue { key: &'a str, value: &'a str },
    Other,
}

fn classify(raw: &str) -> Line<'_> {
    if is_comment(raw) {
        return Line::Blank;
    }

    let line = strip_inline_comment(raw);
    if trim_whitespace(line).is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = ENV_HEADER.captures(line) {
        if let Some(name) = caps.get(2) {
            return Line::EnvHeader {
                name: name.as_str(),
                default: caps.get(1).is_some(),
            };
        }
    }

    if let Some(name) = TASK_HEADER.captures(line).and_then(|caps| caps.get(1)) {
        return Line::TaskHeader(name.as_str());
    }

    match KEY_VALUE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => Line::KeyValue {
                key: key.as_str(),
                value: trim_whitespace(value.as_str()),
            },
            _ => Line::Other,
        },
        None => Line::Other,
    }
}

/// Accumulates finalized blocks into a configuration
#[derive(Default)]
struct Builder {
    config: Config,
    names: NameRegistry,
}

impl Builder {
    fn step(&mut self, state: State, raw: &str) -> ParseResult<State> {
        match classify(raw) {
            Line::Blank => Ok(state),
            Line::TaskHeader(name) => {
                self.finalize(state)?;
                Ok(State::InTask(Task::new(name)))
            }
            Line::EnvHeader { name, default } => {
                self.finalize(state)?;
                if default {
                    if self.config.has_default_env {
                        return Err(ParseError::MultipleDefaultEnvironments);
                    }
                    self.config.has_default_env = true;
                }
                Ok(State::InEnvironment(Environment::new(name, default)))
            }
            Line::KeyValue { key, value } => match state {
                State::Start => Err(ParseError::NoBlockHeaders),
                State::InTask(mut task) => {
                    task.set(key, value);
                    Ok(State::InTask(task))
                }
                State::InEnvironment(mut env) => {
                    env.set(key, value);
                    Ok(State::InEnvironment(env))
                }
            },
            Line::Other => match state {
                State::Start => Err(ParseError::NoBlockHeaders),
                other => Ok(other),
            },
        }
    }

    /// Validate the pending block and commit it
    fn finalize(&mut self, state: State) -> ParseResult<()> {
        match state {
            State::Start => {}
            State::InTask(task) => {
                self.names.register_task(&task)?;
                self.config.tasks.insert(task.name.clone(), task);
            }
            State::InEnvironment(env) => {
                self.names.register_environment(&env)?;
                self.config.environments.insert(env.name.clone(), env);
            }
        }
        Ok(())
    }

    fn finish(mut self, state: State) -> ParseResult<Config> {
        self.finalize(state)?;
        Ok(self.config)
    }
}

/// Parse taskrfile lines into a validated configuration
pub fn parse_lines<I, S>(lines: I) -> ParseResult<Config>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = Builder::default();
    let mut state = State::Start;

    for line in lines {
        state = builder.step(state, line.as_ref())?;
    }

    builder.finish(state)
}

/// Parse configuration from a string
pub fn parse_config(contents: &str) -> ParseResult<Config> {
    parse_lines(contents.lines())
}

/// Read the raw lines of a file
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(path.to_path_buf()).into())
        }
        Err(e) => Err(TaskrError::Io(e)),
    }
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let lines = read_lines(path)?;
    Ok(parse_lines(lines)?)
}
