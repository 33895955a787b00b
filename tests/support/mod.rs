//! Test support utilities for buildcfg integration tests.
//!
//! Provides a throwaway Flutter-style project layout and command helpers.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test project with isolated temp directories.
///
/// Mirrors a Flutter checkout: secrets files live in the project directory,
/// the Android build runs from its `android/` subdirectory. Child commands
/// use `.current_dir()` so no process-global state is mutated.
pub struct Test {
    /// Flutter project directory, holding `.env` files
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project with an `android/` directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("android")).expect("failed to create android dir");
        Self { dir }
    }

    /// Create a project whose default `.env` holds `content`.
    pub fn with_env(content: &str) -> Self {
        let t = Self::new();
        t.write_env(content);
        t
    }

    /// The Android project root, where buildcfg runs.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("android")
    }

    pub fn write_env(&self, content: &str) {
        fs::write(self.dir.path().join(".env"), content).expect("failed to write .env");
    }

    pub fn write_production(&self, content: &str) {
        fs::write(self.dir.path().join(".env.production"), content)
            .expect("failed to write .env.production");
    }

    pub fn write_signing(&self, content: &str) {
        fs::write(self.root().join("key.properties"), content)
            .expect("failed to write key.properties");
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join(".buildcfg.toml"), content)
            .expect("failed to write .buildcfg.toml");
    }

    /// Create a keystore file at `app/<name>` so signing checks find it.
    pub fn write_keystore(&self, name: &str) {
        let app = self.root().join("app");
        fs::create_dir_all(&app).expect("failed to create app dir");
        fs::write(app.join(name), b"not a real keystore").expect("failed to write keystore");
    }
}
