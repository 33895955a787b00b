//! Tests for `buildcfg signing`.

use crate::support::*;

#[test]
fn test_signing_without_properties_is_debug() {
    let t = Test::new();

    let json = t.signing_json();
    assert_eq!(json["config"], "debug");
}

#[test]
fn test_signing_does_not_need_secrets() {
    // No .env at all: signing selection is independent of auth resolution.
    let t = Test::new();
    t.write_signing(SAMPLE_SIGNING);

    let json = t.signing_json();
    assert_eq!(json["config"], "release");
    assert_eq!(json["keyPassword"], "********");
}

#[test]
fn test_signing_without_store_file_is_debug() {
    let t = Test::new();
    t.write_signing(SIGNING_NO_STORE_FILE);

    let json = t.signing_json();
    assert_eq!(json["config"], "debug");
}

#[test]
fn test_signing_text_output() {
    let t = Test::new();
    t.write_signing(SAMPLE_SIGNING);

    let output = t.run(&["signing"]);
    assert_success(&output);
    assert_stdout_contains(&output, "release");
    assert_stdout_contains(&output, "upload");
    assert_stdout_excludes(&output, "store-secret");

    let output = t.run(&["signing", "--show-secrets"]);
    assert_success(&output);
    assert_stdout_contains(&output, "store-secret");
}
