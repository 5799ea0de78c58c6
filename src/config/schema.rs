//! Configuration validation
//!
//! Blocks are validated one at a time, in file order, as the parser
//! finalizes them. The registry remembers every name seen so far.

use crate::config::types::{Environment, Task};
use crate::error::{ParseError, ParseResult};
use std::collections::HashSet;

/// Names declared so far, in two separate namespaces
#[derive(Debug, Default)]
pub struct NameRegistry {
    /// Task names and aliases
    tasks: HashSet<String>,

    /// Environment names
    environments: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a task name or alias has been registered
    pub fn has_task(&self, name: &str) -> bool {
        self.tasks.contains(name)
    }

    /// Check whether an environment name has been registered
    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains(name)
    }

    /// Validate a finished task block and register its name and aliases.
    ///
    /// Dependencies are resolved against names registered up to and
    /// including this task, so a task can only need something declared
    /// before it.
    pub fn register_task(&mut self, task: &Task) -> ParseResult<()> {
        if self.tasks.contains(&task.name) {
            return Err(ParseError::DuplicateTask(task.name.clone()));
        }

        let mut aliases = HashSet::new();
        for alias in &task.alias {
            if *alias == task.name {
                return Err(ParseError::AliasIsTaskName {
                    alias: alias.clone(),
                    task: task.name.clone(),
                });
            }
            if self.tasks.contains(alias) || !aliases.insert(alias.as_str()) {
                return Err(ParseError::DuplicateAlias(alias.clone()));
            }
        }

        if task.run.is_empty() {
            return Err(ParseError::MissingRun(task.name.clone()));
        }

        self.tasks.insert(task.name.clone());
        self.tasks.extend(task.alias.iter().cloned());

        if let Some(dependency) = task.needs.iter().find(|dep| !self.tasks.contains(*dep)) {
            return Err(ParseError::UnresolvedDependency {
                dependency: dependency.clone(),
                task: task.name.clone(),
            });
        }

        Ok(())
    }

    /// Validate a finished environment block and register its name
    pub fn register_environment(&mut self, env: &Environment) -> ParseResult<()> {
        if self.environments.contains(&env.name) {
            return Err(ParseError::DuplicateEnvironment(env.name.clone()));
        }

        if env.file.is_empty() {
            return Err(ParseError::MissingFile(env.name.clone()));
        }

        self.environments.insert(env.name.clone());
        Ok(())
    }
}
