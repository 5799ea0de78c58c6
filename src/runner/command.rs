//! Command execution
//!
//! This module handles executing shell commands.

use crate::runner::Context;
use std::process::{Command as StdCommand, Stdio};

/// Runs a task's shell command.
///
/// The exit status is not reported back; a failing command does not stop
/// the tasks queued after it.
pub trait CommandRunner {
    fn run(&mut self, command: &str, ctx: &Context);
}

/// Runs commands through the context's interpreter, inheriting stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, ctx: &Context) {
        ctx.print_debug(&format!("[RUN] {}", command));

        match shell_command(command, ctx).status() {
            Ok(status) if !status.success() => {
                let code = status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| c.to_string());
                ctx.print_warning(&format!("Command `{}` exited with {}", command, code));
            }
            Ok(_) => {}
            Err(e) => ctx.print_error(&format!("Failed to run `{}`: {}", command, e)),
        }
    }
}

/// Build the process for a command string
fn shell_command(command: &str, ctx: &Context) -> StdCommand {
    let (program, args) = match ctx.interpreter.split_first() {
        Some((program, args)) => (program.as_str(), args),
        None => ("sh", &[][..]),
    };

    let mut cmd = StdCommand::new(program);
    cmd.args(args)
        .arg(command)
        .current_dir(&ctx.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}
