//! Tests for `buildcfg resolve`.

use crate::support::*;

#[test]
fn test_resolve_json_debug_signing() {
    let t = Test::with_env(SAMPLE_ENV);

    let json = t.resolve_json();

    assert_eq!(json["manifestPlaceholders"]["auth0Domain"], "example.com");
    assert_eq!(json["manifestPlaceholders"]["auth0Scheme"], "com.example.app");
    assert_eq!(json["signing"]["config"], "debug");
    assert_eq!(json["production"], false);
    assert_eq!(json["jniExcludes"].as_array().unwrap().len(), 4);
}

#[test]
fn test_resolve_json_release_signing_masks_passwords() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_signing(SAMPLE_SIGNING);

    let json = t.resolve_json();

    assert_eq!(json["signing"]["config"], "release");
    assert_eq!(json["signing"]["keyAlias"], "upload");
    assert_eq!(json["signing"]["storePassword"], "********");
    assert!(json["signing"]["storeFile"]
        .as_str()
        .unwrap()
        .ends_with("upload-keystore.jks"));
}

#[test]
fn test_resolve_show_secrets() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_signing(SAMPLE_SIGNING);

    let output = t.run(&["resolve", "--format", "json", "--show-secrets"]);
    assert_success(&output);
    assert_stdout_contains(&output, "store-secret");
    assert_stdout_contains(&output, "key-secret");
}

#[test]
fn test_resolve_properties() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t.run(&["resolve", "--format", "properties"]);
    assert_success(&output);
    assert_stdout_contains(&output, "auth0Domain=example.com\n");
    assert_stdout_contains(&output, "auth0Scheme=com.example.app\n");
    assert_stdout_contains(&output, "signing.config=debug\n");
    assert_stdout_contains(&output, "jniExcludes=");
}

#[test]
fn test_resolve_text() {
    let t = Test::with_env(SAMPLE_ENV);
    t.write_signing(SAMPLE_SIGNING);

    let output = t.run(&["resolve"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Manifest placeholders");
    assert_stdout_contains(&output, "auth0Domain");
    assert_stdout_contains(&output, "release");
    assert_stdout_excludes(&output, "store-secret");
}

#[test]
fn test_resolve_custom_placeholders() {
    let t = Test::with_env("APP_SCHEME=com.custom\nAPP_DOMAIN=custom.example.com\n");
    t.write_config(
        r#"
[auth]
scheme_key = "APP_SCHEME"
domain_key = "APP_DOMAIN"
scheme_placeholder = "appScheme"
domain_placeholder = "appDomain"

[packaging]
jni_excludes = []
"#,
    );

    let json = t.resolve_json();
    assert_eq!(json["manifestPlaceholders"]["appDomain"], "custom.example.com");
    assert_eq!(json["manifestPlaceholders"]["appScheme"], "com.custom");
    assert!(json["jniExcludes"].as_array().unwrap().is_empty());
}

#[test]
fn test_resolve_fails_without_scheme() {
    let t = Test::with_env("AUTH0_DOMAIN=example.com\n");

    let output = t.run(&["resolve", "--format", "json"]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty(), "no partial output on failure");
    assert_stderr_contains(&output, "AUTH0_SCHEME");
}
