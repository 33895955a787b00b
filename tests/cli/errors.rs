//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("buildcfg") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    assert_failure(&t.run(&["unknown-command"]));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "buildcfg");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_buildcfg") || out.contains("complete"));
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    t.write_config("not valid toml {");

    let output = t.run(&["completions", "zsh"]);
    assert_success(&output);
}

#[test]
fn test_malformed_config_fails_with_hint() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_config("this is not valid toml { [ }");

    let output = t.get("AUTH0_DOMAIN");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
    assert_stderr_contains(&output, "check .buildcfg.toml");
}

#[test]
fn test_unknown_config_field_fails() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_config("[secrets]\ndefualt_file = \".env\"\n");

    assert_failure(&t.get("AUTH0_DOMAIN"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.run(&["--config", "nope.toml", "get", "AUTH0_DOMAIN"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config");
}

#[test]
fn test_error_output_is_prefixed() {
    let t = Test::new();

    let output = t.get("AUTH0_DOMAIN");
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ ");
    assert_stderr_contains(&output, "→ ");
}
