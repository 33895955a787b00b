//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's shell into the tests.
const SCRUBBED_ENV: &[&str] = &[
    "AUTH0_SCHEME",
    "AUTH0_DOMAIN",
    "BUILDCFG_DIR",
    "BUILDCFG_CONFIG",
    "BUILDCFG_PRODUCTION",
    "BUILDCFG_LOG",
];

impl Test {
    /// Create a buildcfg command running from the Android root.
    ///
    /// Auth variables are removed from the child environment and colors are
    /// disabled so output can be matched literally.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("buildcfg").expect("failed to find buildcfg binary");
        for name in SCRUBBED_ENV {
            cmd.env_remove(name);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.root());
        cmd
    }

    /// Run buildcfg with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run buildcfg")
    }

    /// Shortcut for `buildcfg get <key>`.
    pub fn get(&self, key: &str) -> Output {
        self.run(&["get", key])
    }

    /// Shortcut for `buildcfg resolve --format json`, parsed.
    pub fn resolve_json(&self) -> serde_json::Value {
        let output = self.run(&["resolve", "--format", "json"]);
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("resolve output is not JSON")
    }

    /// Shortcut for `buildcfg signing --json`, parsed.
    pub fn signing_json(&self) -> serde_json::Value {
        let output = self.run(&["signing", "--json"]);
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("signing output is not JSON")
    }

    /// Shortcut for `buildcfg check`.
    pub fn check(&self) -> Output {
        self.run(&["check"])
    }
}
