//! Tests for `buildcfg get`.

use crate::support::*;

#[test]
fn test_get_from_default_env() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.get("AUTH0_DOMAIN");
    assert_success(&output);
    assert_eq!(stdout(&output), "example.com\n");
}

#[test]
fn test_get_ignores_comments_and_trims() {
    let t = Test::with_env(SAMPLE_ENV_COMPLEX);

    let output = t.get("AUTH0_DOMAIN");
    assert_success(&output);
    assert_eq!(stdout(&output), "padded.example.com\n");
}

#[test]
fn test_get_environment_wins() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t
        .cmd()
        .env("AUTH0_DOMAIN", "env.example.com")
        .args(["get", "AUTH0_DOMAIN"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "env.example.com\n");
}

#[test]
fn test_get_prefers_production_file() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_production(PRODUCTION_ENV);

    let output = t.get("AUTH0_DOMAIN");
    assert_success(&output);
    assert_eq!(stdout(&output), "prod.example.com\n");
}

#[test]
fn test_get_missing_key_fails() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.get("AUTH0_CLIENT_ID");
    assert_failure(&output);
    assert_stderr_contains(&output, "AUTH0_CLIENT_ID not found");
    assert_stderr_contains(&output, "AUTH0_CLIENT_ID=...");
}

#[test]
fn test_get_empty_value_fails() {
    let t = Test::with_env("AUTH0_DOMAIN=   \n");

    let output = t.get("AUTH0_DOMAIN");
    assert_failure(&output);
    assert_stderr_contains(&output, "AUTH0_DOMAIN is empty in .env");
}

#[test]
fn test_get_missing_file_fails() {
    let t = Test::new();

    let output = t.get("AUTH0_DOMAIN");
    assert_failure(&output);
    assert_stderr_contains(&output, "required secrets file not found");
    assert_stderr_contains(&output, ".env");
}

#[test]
fn test_get_production_flag_requires_production_file() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.run(&["--production", "get", "AUTH0_DOMAIN"]);
    assert_failure(&output);
    assert_stderr_contains(&output, ".env.production");

    let output = t
        .cmd()
        .env("BUILDCFG_PRODUCTION", "true")
        .args(["get", "AUTH0_DOMAIN"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_get_fallback_from_config() {
    let t = Test::new();
    t.write_config("[auth.fallbacks]\nAUTH0_SCHEME = \"com.fallback.app\"\n");

    let output = t.get("AUTH0_SCHEME");
    assert_success(&output);
    assert_eq!(stdout(&output), "com.fallback.app\n");
}

#[test]
fn test_get_with_dir_flag() {
    let t = Test::with_env(SAMPLE_ENV);
    let root = t.root();

    let output = t
        .cmd()
        .current_dir(t.dir.path())
        .args(["-C", root.to_str().unwrap(), "get", "AUTH0_SCHEME"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "com.example.app\n");
}
