//! Main CLI application

use crate::config::{find_config_file, parse_config_file, Config};
use crate::error::{LookupError, Result, TaskrError};
use crate::runner::{load_env_file, Context, Executor, ProcessEnv, ShellRunner, Verbosity};
use crate::ui;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Help or version text was printed by clap
    Printed,
    /// Print a completion script
    Completions(Shell),
    /// List tasks and environments
    List { file: Option<PathBuf> },
    /// Run a task or alias
    Run {
        task: String,
        environment: Option<String>,
        file: Option<PathBuf>,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub invocation: Invocation,
    pub verbosity: Verbosity,
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("taskr")
        .version(crate::VERSION)
        .about("Run tasks and their dependencies from a taskrfile")
        .arg(
            Arg::new("task")
                .value_name("TASK")
                .help("Task or alias to run"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List the available tasks and environments")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["task", "environment"]),
        )
        .arg(
            Arg::new("environment")
                .short('e')
                .long("environment")
                .value_name("NAME")
                .help("Select the environment to use"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a taskrfile instead of searching for one"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script")
                .exclusive(true),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Parse command line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(Cli {
                invocation: Invocation::Printed,
                verbosity: Verbosity::Normal,
            });
        }
        Err(e) => {
            let rendered = e.to_string();
            let detail = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            return Err(TaskrError::Argument(detail));
        }
    };

    let verbosity = get_verbosity(&matches);
    let file = matches.get_one::<PathBuf>("file").cloned();

    let invocation = if let Some(shell) = matches.get_one::<Shell>("completions") {
        Invocation::Completions(*shell)
    } else if matches.get_flag("list") {
        Invocation::List { file }
    } else {
        let task = matches
            .get_one::<String>("task")
            .cloned()
            .ok_or_else(|| TaskrError::Argument("no task specified".to_string()))?;
        Invocation::Run {
            task,
            environment: matches.get_one::<String>("environment").cloned(),
            file,
        }
    };

    Ok(Cli {
        invocation,
        verbosity,
    })
}

/// Print usage help to stdout
pub fn print_usage() {
    let _ = build_command().print_help();
    println!();
}

/// Locate and parse the configuration, returning it with its path
fn load_config(file: Option<PathBuf>, ctx: &Context) -> Result<(Config, PathBuf)> {
    let path = match file {
        Some(path) => path,
        None => {
            let location = find_config_file()?;
            if location.global {
                ctx.print_info("Using global config");
            }
            location.path
        }
    };

    ctx.print_debug(&format!("Using config file: {}", path.display()));
    let config = parse_config_file(&path)?;
    Ok((config, path))
}

/// Fail unless `task` names a task or one of its aliases
fn ensure_task_exists(config: &Config, task: &str) -> Result<()> {
    if config.task_names_and_aliases().contains(task) {
        Ok(())
    } else {
        Err(LookupError::TaskNotFound(task.to_string()).into())
    }
}

/// Export the selected environment, or the default one if none was selected
fn apply_environment(config: &Config, selected: Option<&str>, ctx: &Context) -> Result<()> {
    let env = match selected {
        Some(name) => Some(
            config
                .environment(name)
                .ok_or_else(|| LookupError::EnvironmentNotFound(name.to_string()))?,
        ),
        None => config.default_environment(),
    };

    if let Some(env) = env {
        let path = ctx.config_dir().join(&env.file);
        ctx.print_debug(&format!(
            "Loading environment '{}' from {}",
            env.name,
            path.display()
        ));
        let vars = load_env_file(&path, &mut ProcessEnv)?;
        ctx.print_debug(&format!("Exported {} variable(s)", vars.len()));
    }

    Ok(())
}

/// Carry out a parsed command line
pub fn run_cli(cli: Cli) -> Result<()> {
    let ctx = Context::new().with_verbosity(cli.verbosity);

    match cli.invocation {
        Invocation::Printed => Ok(()),
        Invocation::Completions(shell) => {
            let mut cmd = build_command();
            clap_complete::generate(shell, &mut cmd, "taskr", &mut io::stdout());
            Ok(())
        }
        Invocation::List { file } => {
            let (config, _) = load_config(file, &ctx)?;
            ui::print_config(&config);
            Ok(())
        }
        Invocation::Run {
            task,
            environment,
            file,
        } => {
            let (config, path) = load_config(file, &ctx)?;
            let ctx = ctx.with_config_path(path);
            apply_environment(&config, environment.as_deref(), &ctx)?;
            ensure_task_exists(&config, &task)?;

            Executor::new(&config, ShellRunner).execute(&task, &ctx)?;
            Ok(())
        }
    }
}

/// Run the CLI application with the given arguments
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_cli(parse_args(args)?)
}
