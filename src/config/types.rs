//! Core configuration types
//!
//! This module defines the data structures that represent a taskrfile.

use std::collections::{BTreeMap, BTreeSet};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether one of the environments is marked as default
    pub has_default_env: bool,

    /// Environments keyed by name
    pub environments: BTreeMap<String, Environment>,

    /// Tasks keyed by name
    pub tasks: BTreeMap<String, Task>,
}

impl Config {
    /// Find a task by its name or one of its aliases
    pub fn find_task(&self, name_or_alias: &str) -> Option<&Task> {
        self.tasks.get(name_or_alias).or_else(|| {
            self.tasks
                .values()
                .find(|task| task.alias.iter().any(|a| a == name_or_alias))
        })
    }

    /// Look up an environment by name
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    /// The environment loaded when none is selected explicitly
    pub fn default_environment(&self) -> Option<&Environment> {
        if !self.has_default_env {
            return None;
        }
        self.environments.values().find(|env| env.is_default)
    }

    /// Every name a task can be requested by
    pub fn task_names_and_aliases(&self) -> BTreeSet<&str> {
        self.tasks
            .values()
            .flat_map(|task| {
                std::iter::once(task.name.as_str()).chain(task.alias.iter().map(String::as_str))
            })
            .collect()
    }

    /// Whether there is nothing to list
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.environments.is_empty()
    }
}

/// A task definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Task name
    pub name: String,

    /// Shell command to run
    pub run: String,

    /// Description shown in the listing
    pub desc: String,

    /// Alternate names
    pub alias: Vec<String>,

    /// Tasks that must run first, in order
    pub needs: Vec<String>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Apply a `key = value` line. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "run" => self.run = value.to_string(),
            "desc" => self.desc = value.to_string(),
            "alias" => self.alias = crate::utils::split_list(value, ','),
            "needs" => self.needs = crate::utils::split_list(value, ','),
            _ => {}
        }
    }
}

/// A named environment file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Environment name
    pub name: String,

    /// Path to the KEY=VALUE file
    pub file: String,

    /// Whether this environment is loaded when none is selected
    pub is_default: bool,
}

impl Environment {
    pub fn new(name: impl Into<String>, is_default: bool) -> Self {
        Environment {
            name: name.into(),
            file: String::new(),
            is_default,
        }
    }

    /// Apply a `key = value` line. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if key == "file" {
            self.file = value.to_string();
        }
    }
}
