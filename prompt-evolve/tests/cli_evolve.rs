//! CLI tests for `prompt-evolve`.
//!
//! Spawns the binary against temporary project roots and checks the written
//! output, console line and exit code.

use std::fs;
use std::process::Command;

use devflow::exit_codes;
use devflow::test_support::TestProject;

const RULE: &str = "---
description: Style
---
# Style
You should keep functions short.
";

fn prompt_evolve(project: &TestProject, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_prompt-evolve"))
        .arg("--root")
        .arg(project.root())
        .args(extra)
        .output()
        .expect("run prompt-evolve")
}

#[test]
fn mutates_rule_into_experimental_file() {
    let project = TestProject::new();
    project.rule("001-style.md", RULE);

    let output = prompt_evolve(&project, &["--seed", "3"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("✓ Mutated 001-style.md:"), "{stdout}");
    assert!(stdout.trim_end().ends_with("→ zzz-experimental.mdc"), "{stdout}");

    let written = fs::read_to_string(&project.paths.mutation_output).expect("read output");
    let before: Vec<&str> = RULE.lines().collect();
    let after: Vec<&str> = written.lines().collect();
    assert_eq!(before.len(), after.len());
    assert_eq!(before[..3], after[..3]);
    assert_eq!(
        (0..before.len()).filter(|&i| before[i] != after[i]).count(),
        1
    );
}

#[test]
fn same_seed_gives_same_output() {
    let project = TestProject::new();
    project.rule("001-style.md", RULE);
    project.rule("002-tests.md", "# Tests\nEnsure coverage.\nMust pass.\n");

    prompt_evolve(&project, &["--seed", "11"]);
    let first = fs::read(&project.paths.mutation_output).expect("first");
    prompt_evolve(&project, &["--seed", "11"]);
    let second = fs::read(&project.paths.mutation_output).expect("second");

    assert_eq!(first, second);
}

#[test]
fn no_rule_documents_exits_cleanly_without_output() {
    let project = TestProject::new();

    let output = prompt_evolve(&project, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No rule documents found"));
    assert!(!project.paths.mutation_output.exists());
}

#[test]
fn no_editable_lines_exits_cleanly_without_output() {
    let project = TestProject::new();
    project.rule("001-empty.md", "---\ndescription: x\n---\n\n");

    let output = prompt_evolve(&project, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No editable lines found"));
    assert!(!project.paths.mutation_output.exists());
}

#[test]
fn invalid_config_fails() {
    let project = TestProject::new();
    fs::write(&project.paths.config_path, "[evolve]\noutput_name = \"\"\n").expect("config");

    let output = prompt_evolve(&project, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("output_name"));
}
