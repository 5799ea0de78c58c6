//! Integration tests for taskrfile parsing

mod common;

use taskr::config::{parse_config, parse_config_file, parse_lines, Task};
use taskr::error::{ParseError, TaskrError};

fn parse_err(lines: &[&str]) -> ParseError {
    parse_lines(lines).unwrap_err()
}

#[test]
fn test_empty_file() {
    let config = parse_lines(Vec::<String>::new()).unwrap();
    assert!(config.tasks.is_empty());
    assert!(config.environments.is_empty());
    assert!(!config.has_default_env);
}

#[test]
fn test_no_block_header() {
    let err = parse_err(&["  run = echo nothing"]);
    assert_eq!(err, ParseError::NoBlockHeaders);
    assert_eq!(
        TaskrError::from(err).to_string(),
        "Parse error: No block headers found"
    );
}

#[test]
fn test_comments_before_first_header_are_fine() {
    let config = parse_lines(["// tasks for this repo", "", "task build:", "  run = make"]).unwrap();
    assert_eq!(config.tasks.len(), 1);
}

#[test]
fn test_valid_task() {
    let config = parse_lines(["task build:", "  run = echo build"]).unwrap();

    assert_eq!(config.tasks.len(), 1);
    assert!(config.environments.is_empty());
    assert!(!config.has_default_env);

    let task = &config.tasks["build"];
    assert_eq!(
        task,
        &Task {
            name: "build".to_string(),
            run: "echo build".to_string(),
            desc: String::new(),
            alias: vec![],
            needs: vec![],
        }
    );
}

#[test]
fn test_valid_full_task() {
    let config = parse_lines([
        "task build:",
        "  run = echo build",
        "",
        "task install: // installs",
        "  run   = echo install",
        "  desc  = prints install",
        "  needs = build",
        "  alias = i, inst",
        "  color = blue",
    ])
    .unwrap();

    assert_eq!(config.tasks.len(), 2);
    let task = &config.tasks["install"];
    assert_eq!(task.run, "echo install");
    assert_eq!(task.desc, "prints install");
    assert_eq!(task.alias, vec!["i", "inst"]);
    assert_eq!(task.needs, vec!["build"]);
}

#[test]
fn test_inline_comment_is_stripped_from_values() {
    let config = parse_lines(["task build:", "  run = make all // everything"]).unwrap();
    assert_eq!(config.tasks["build"].run, "make all");
}

#[test]
fn test_non_ascii_name_is_not_a_header() {
    let err = parse_err(&["task t\u{e2}che:", "  run = echo x"]);
    assert_eq!(err, ParseError::NoBlockHeaders);
    assert_eq!(err.to_string(), "No block headers found");
}

#[test]
fn test_missing_run() {
    let err = parse_err(&["task build:", "desc = build task"]);
    assert_eq!(err, ParseError::MissingRun("build".to_string()));
    assert_eq!(err.to_string(), "Task 'build' is missing required key: 'run'");
}

#[test]
fn test_task_defined_twice() {
    let err = parse_err(&[
        "task build:",
        "  run = echo build",
        "task build:",
        "  run = echo build",
    ]);
    assert_eq!(err.to_string(), "Task 'build' is defined more than once");
}

#[test]
fn test_alias_is_own_name() {
    let err = parse_err(&["task build:", "  run = echo build", "  alias = build"]);
    assert_eq!(
        err.to_string(),
        "Alias 'build' cannot be the same as the task name 'build'"
    );
}

#[test]
fn test_alias_is_other_task() {
    let err = parse_err(&[
        "task build:",
        "  run = echo build",
        "task create:",
        "  run = echo create",
        "  alias = build",
    ]);
    assert_eq!(err.to_string(), "Alias 'build' is used more than once or is a task");
}

#[test]
fn test_alias_used_by_two_tasks() {
    let err = parse_err(&[
        "task build:",
        "  run = echo build",
        "  alias = b",
        "task bundle:",
        "  run = echo bundle",
        "  alias = b",
    ]);
    assert_eq!(err, ParseError::DuplicateAlias("b".to_string()));
}

#[test]
fn test_task_named_like_earlier_alias() {
    let err = parse_err(&[
        "task build:",
        "  run = echo build",
        "  alias = b",
        "task b:",
        "  run = echo b",
    ]);
    assert_eq!(err, ParseError::DuplicateTask("b".to_string()));
}

#[test]
fn test_unresolved_dependency() {
    let err = parse_err(&["task build:", "  run = echo build", "  needs = greeting"]);
    assert_eq!(
        err.to_string(),
        "Dependency 'greeting' of task 'build' could not be resolved"
    );
}

#[test]
fn test_forward_reference_is_unresolved() {
    let err = parse_err(&[
        "task deploy:",
        "  run = echo deploy",
        "  needs = build",
        "task build:",
        "  run = echo build",
    ]);
    assert_eq!(
        err,
        ParseError::UnresolvedDependency {
            dependency: "build".to_string(),
            task: "deploy".to_string(),
        }
    );
}

#[test]
fn test_dependency_on_earlier_alias() {
    let config = parse_lines([
        "task build:",
        "  run = echo build",
        "  alias = b",
        "task deploy:",
        "  run = echo deploy",
        "  needs = b",
    ])
    .unwrap();
    assert_eq!(config.tasks["deploy"].needs, vec!["b"]);
}

#[test]
fn test_valid_env() {
    let config = parse_lines(["env dev:", "  file = .env"]).unwrap();

    assert!(config.tasks.is_empty());
    assert_eq!(config.environments.len(), 1);
    assert!(!config.has_default_env);

    let env = &config.environments["dev"];
    assert_eq!(env.name, "dev");
    assert_eq!(env.file, ".env");
    assert!(!env.is_default);
}

#[test]
fn test_valid_default_env() {
    let config = parse_lines(["default env dev:", "  file = .env"]).unwrap();

    assert!(config.has_default_env);
    let env = &config.environments["dev"];
    assert_eq!(env.file, ".env");
    assert!(env.is_default);
    assert_eq!(config.default_environment(), Some(env));
}

#[test]
fn test_env_missing_file() {
    let err = parse_err(&["env dev:"]);
    assert_eq!(
        err.to_string(),
        "Environment 'dev' is missing required key: 'file'"
    );
}

#[test]
fn test_env_defined_twice() {
    let err = parse_err(&["env dev:", "  file = .env", "env dev:", "  file = dev.env"]);
    assert_eq!(err.to_string(), "Environment 'dev' is defined more than once");
}

#[test]
fn test_multiple_default_envs() {
    let err = parse_err(&[
        "default env dev:",
        "  file = .env",
        "default env test:",
        "  file = test.env",
    ]);
    assert_eq!(err, ParseError::MultipleDefaultEnvironments);
    assert_eq!(err.to_string(), "More than 1 default environment found");
}

#[test]
fn test_task_and_env_may_share_a_name() {
    let config = parse_lines([
        "task dev:",
        "  run = echo dev",
        "env dev:",
        "  file = dev.env",
    ])
    .unwrap();
    assert!(config.tasks.contains_key("dev"));
    assert!(config.environments.contains_key("dev"));
}

#[test]
fn test_mixed_blocks() {
    let config = parse_config(
        r#"
// Project tasks
default env local:
  file = .env

task build:
  run = cargo build
  desc = Build the project
  alias = b

env ci:
  file = ci.env   // used by the pipeline

task test:
  run = cargo test
  needs = b
"#,
    )
    .unwrap();

    assert_eq!(config.tasks.len(), 2);
    assert_eq!(config.environments.len(), 2);
    assert_eq!(config.environments["ci"].file, "ci.env");
    assert_eq!(config.find_task("b").map(|t| t.name.as_str()), Some("build"));
}

#[test]
fn test_parse_config_file_from_disk() {
    let (_dir, path) = common::create_test_config("task hello:\n  run = echo hello\n");
    let config = parse_config_file(&path).unwrap();
    assert_eq!(config.tasks["hello"].run, "echo hello");
}
