//! Dependency-resolving task executor
//!
//! Dependencies run before the tasks that need them, and every task runs at
//! most once per invocation, however many tasks need it.

use crate::config::{Config, Task};
use crate::error::{LookupError, LookupResult};
use crate::runner::{CommandRunner, Context};
use std::collections::HashSet;

/// Compute the dependency-first execution sequence for a task or alias
pub fn resolve_order<'a>(config: &'a Config, name: &str) -> LookupResult<Vec<&'a Task>> {
    let mut resolver = Resolver {
        config,
        visited: HashSet::new(),
        in_progress: Vec::new(),
        order: Vec::new(),
    };
    resolver.visit(name)?;
    Ok(resolver.order)
}

struct Resolver<'a> {
    config: &'a Config,
    /// Canonical names already scheduled or being scheduled
    visited: HashSet<&'a str>,
    /// Path from the requested task to the current one
    in_progress: Vec<&'a str>,
    order: Vec<&'a Task>,
}

impl<'a> Resolver<'a> {
    fn visit(&mut self, name: &str) -> LookupResult<()> {
        let config = self.config;
        let task = config
            .find_task(name)
            .ok_or_else(|| LookupError::TaskNotFound(name.to_string()))?;

        if self.in_progress.contains(&task.name.as_str()) {
            let mut path = self.in_progress.clone();
            path.push(task.name.as_str());
            return Err(LookupError::CircularDependency(path.join(" -> ")));
        }

        if !self.visited.insert(task.name.as_str()) {
            return Ok(());
        }

        self.in_progress.push(task.name.as_str());
        for dependency in &task.needs {
            self.visit(dependency)?;
        }
        self.in_progress.pop();

        self.order.push(task);
        Ok(())
    }
}

/// Runs tasks of one configuration through a command runner
pub struct Executor<'a, R> {
    config: &'a Config,
    runner: R,
}

impl<'a, R: CommandRunner> Executor<'a, R> {
    pub fn new(config: &'a Config, runner: R) -> Self {
        Executor { config, runner }
    }

    /// Run a task and all of its transitive dependencies.
    ///
    /// The whole sequence is resolved before the first command starts, so a
    /// missing dependency runs nothing. Returns the executed task names in
    /// order.
    pub fn execute(&mut self, name: &str, ctx: &Context) -> LookupResult<Vec<String>> {
        let order = resolve_order(self.config, name)?;
        ctx.print_debug(&format!(
            "Execution order: {}",
            order
                .iter()
                .map(|task| task.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let mut executed = Vec::with_capacity(order.len());
        for task in order {
            ctx.print_task_start(&task.name);
            self.runner.run(&task.run, ctx);
            ctx.print_task_complete(&task.name);
            executed.push(task.name.clone());
        }

        Ok(executed)
    }

    /// Give back the runner, e.g. to inspect what it recorded
    pub fn into_runner(self) -> R {
        self.runner
    }
}
