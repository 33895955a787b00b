//! Required value resolution.
//!
//! A key is looked up in this order, first hit wins:
//!
//! 1. the environment (via [`Lookup`])
//! 2. the selected secrets file: the production file when production mode is
//!    forced or the production file exists, the default file otherwise
//! 3. a configured fallback literal
//!
//! A blank value at any level is an error, never a reason to fall through.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::{Env, ResolvedAuthConfig};
use crate::core::lookup::Lookup;
use crate::error::{ResolveError, Result};

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Environment,
    File(PathBuf),
    Fallback,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Environment => f.write_str("environment"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Fallback => f.write_str("fallback"),
        }
    }
}

/// A resolved value with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// The secrets file chosen for this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsFile {
    pub path: PathBuf,
    pub production: bool,
}

impl SecretsFile {
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Resolves required values against the environment, secrets files and
/// fallbacks described by a [`Config`].
pub struct Resolver<'a, L> {
    config: &'a Config,
    lookup: L,
}

impl<'a, L: Lookup> Resolver<'a, L> {
    pub fn new(config: &'a Config, lookup: L) -> Self {
        Self { config, lookup }
    }

    /// Pick the secrets file for this build.
    pub fn secrets_file(&self) -> SecretsFile {
        let production_path = self.config.production_env_file();
        let production = self.config.secrets.production || production_path.exists();

        let path = if production {
            production_path
        } else {
            self.config.default_env_file()
        };

        SecretsFile { path, production }
    }

    /// Resolve a required key to its value.
    ///
    /// # Errors
    ///
    /// - `ResolveError::EmptyValue` if the value is blank
    /// - `ResolveError::MissingFile` if the secrets file is needed but absent
    /// - `ResolveError::MissingKey` if no source defines the key
    /// - `ResolveError::Read` if the secrets file cannot be read
    pub fn resolve_required(&self, key: &str) -> Result<String> {
        self.resolve(key).map(|r| r.value)
    }

    /// Resolve a required key, reporting which source supplied it.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve_required`].
    pub fn resolve(&self, key: &str) -> Result<Resolved> {
        let file = SecretsCache::new(self.secrets_file());
        self.resolve_in(key, &file)
    }

    /// Resolve the auth scheme and domain.
    ///
    /// The secrets file is read at most once for both keys, and not at all
    /// when the environment supplies them.
    pub fn resolve_auth(&self) -> Result<ResolvedAuthConfig> {
        let file = SecretsCache::new(self.secrets_file());
        let auth = &self.config.auth;

        let scheme = self.resolve_in(&auth.scheme_key, &file)?;
        let domain = self.resolve_in(&auth.domain_key, &file)?;

        Ok(ResolvedAuthConfig {
            scheme: scheme.value,
            domain: domain.value,
        })
    }

    fn resolve_in(&self, key: &str, file: &SecretsCache) -> Result<Resolved> {
        if let Some(value) = self.lookup.get(key) {
            return found(key, value.trim(), Source::Environment);
        }

        let fallback = self.config.auth.fallbacks.get(key);

        let Some(env) = file.get()? else {
            return match fallback {
                Some(value) => found(key, value, Source::Fallback),
                None => Err(ResolveError::MissingFile {
                    path: file.selected.path.clone(),
                }
                .into()),
            };
        };

        match (env.get(key), fallback) {
            (Some(value), _) => found(key, value, Source::File(env.path().to_path_buf())),
            (None, Some(value)) => found(key, value, Source::Fallback),
            (None, None) => Err(ResolveError::MissingKey {
                key: key.to_string(),
                path: env.path().to_path_buf(),
            }
            .into()),
        }
    }
}

/// The selected secrets file, read on first use.
struct SecretsCache {
    selected: SecretsFile,
    env: OnceCell<Option<Env>>,
}

impl SecretsCache {
    fn new(selected: SecretsFile) -> Self {
        Self {
            selected,
            env: OnceCell::new(),
        }
    }

    /// The parsed file, or `None` if it does not exist.
    fn get(&self) -> Result<Option<&Env>> {
        if let Some(env) = self.env.get() {
            return Ok(env.as_ref());
        }
        let loaded = self.load()?;
        Ok(self.env.get_or_init(|| loaded).as_ref())
    }

    fn load(&self) -> Result<Option<Env>> {
        let file = &self.selected;
        if !file.exists() {
            debug!(path = %file.path.display(), "secrets file absent");
            return Ok(None);
        }

        debug!(
            path = %file.path.display(),
            production = file.production,
            "reading secrets file"
        );
        let env = Env::load(&file.path).map_err(|source| ResolveError::Read {
            path: file.path.clone(),
            source,
        })?;
        Ok(Some(env))
    }
}

fn found(key: &str, value: &str, source: Source) -> Result<Resolved> {
    if value.trim().is_empty() {
        return Err(ResolveError::EmptyValue {
            key: key.to_string(),
            source_name: source_name(&source),
        }
        .into());
    }

    debug!(key, source = %source, "resolved");
    Ok(Resolved {
        value: value.to_string(),
        source,
    })
}

fn source_name(source: &Source) -> String {
    match source {
        Source::File(path) => file_name(path),
        other => other.to_string(),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
