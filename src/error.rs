//! Error types.
//!
//! Errors are layered: each concern gets its own enum and the top-level
//! [`Error`] wraps them so callers can match on the category they care about.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while resolving a required value.
///
/// None of these are recoverable: the build is expected to abort.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("required secrets file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("required variable {key} not found in {}", path.display())]
    MissingKey { key: String, path: PathBuf },

    #[error("variable {key} is empty in {source_name}")]
    EmptyValue { key: String, source_name: String },

    #[error("failed to read secrets file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} required value(s) failed to resolve")]
    Incomplete { failed: usize },
}

/// Problems with `.buildcfg.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Problems reading the signing properties file.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("failed to read signing properties {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
