//! Configuration file management.
//!
//! Handles reading and validating the optional `.buildcfg.toml`. Every field
//! has a default matching a stock Flutter `android/` directory, so the file
//! is only needed to deviate from that layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration, optionally stored in `.buildcfg.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Secrets file locations and production selection
    pub secrets: SecretsConfig,
    /// Which variables feed which manifest placeholders
    pub auth: AuthConfig,
    /// Signing properties location
    pub signing: SigningConfig,
    /// Packaging exclusions
    pub packaging: PackagingConfig,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

/// `[secrets]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsConfig {
    /// Default secrets file
    pub default_file: PathBuf,
    /// Production secrets file, preferred whenever it exists
    pub production_file: PathBuf,
    /// Force production mode; the production file must then exist
    pub production: bool,
}

/// `[auth]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub scheme_key: String,
    pub domain_key: String,
    pub scheme_placeholder: String,
    pub domain_placeholder: String,
    /// Literal values used when a key is in neither the environment nor the
    /// secrets file. Empty by default: a missing key fails the build.
    pub fallbacks: BTreeMap<String, String>,
}

/// `[signing]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigningConfig {
    /// Java properties file holding the release keystore credentials
    pub properties_file: PathBuf,
    /// Base directory for a relative `storeFile`
    pub keystore_base: PathBuf,
}

/// `[packaging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    /// Native library globs excluded from the package
    pub jni_excludes: Vec<String>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(constants::ENV_FILE),
            production_file: PathBuf::from(constants::ENV_PRODUCTION_FILE),
            production: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            scheme_key: constants::SCHEME_KEY.to_string(),
            domain_key: constants::DOMAIN_KEY.to_string(),
            scheme_placeholder: constants::SCHEME_PLACEHOLDER.to_string(),
            domain_placeholder: constants::DOMAIN_PLACEHOLDER.to_string(),
            fallbacks: BTreeMap::new(),
        }
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            properties_file: PathBuf::from(constants::SIGNING_FILE),
            keystore_base: PathBuf::from(constants::KEYSTORE_BASE),
        }
    }
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            jni_excludes: constants::JNI_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Path of the configuration file for a project root
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load configuration for the project at `root`.
    ///
    /// An explicit `path` must exist. Without one, `.buildcfg.toml` in the
    /// root is used when present and defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` for malformed TOML, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(root: impl Into<PathBuf>, path: Option<&Path>) -> Result<Self> {
        let root = root.into();
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::config_path(&root);
                if !p.exists() {
                    debug!(root = %root.display(), "no config file, using defaults");
                    return Ok(Self::new(root));
                }
                p
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let mut config = Self::parse(&contents)?;
        config.root = root;
        Ok(config)
    }

    /// Parse and validate TOML configuration content
    ///
    /// The returned config is rooted at the empty path (the current directory).
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;

        debug!(
            fallbacks = config.auth.fallbacks.len(),
            excludes = config.packaging.jni_excludes.len(),
            "config parsed"
        );

        config.validate()?;
        Ok(config)
    }

    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Override the production flag
    pub fn with_production(mut self, production: bool) -> Self {
        self.secrets.production = self.secrets.production || production;
        self
    }

    /// Resolve a configured path against the project root
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn default_env_file(&self) -> PathBuf {
        self.resolve_path(&self.secrets.default_file)
    }

    pub fn production_env_file(&self) -> PathBuf {
        self.resolve_path(&self.secrets.production_file)
    }

    pub fn signing_file(&self) -> PathBuf {
        self.resolve_path(&self.signing.properties_file)
    }

    pub fn keystore_base(&self) -> PathBuf {
        self.resolve_path(&self.signing.keystore_base)
    }

    /// Validate the configuration contents
    ///
    /// Checks:
    /// - Variable and placeholder names are non-empty
    /// - The two placeholders are distinct
    /// - Fallback values are non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        let names = [
            ("auth.scheme_key", &self.auth.scheme_key),
            ("auth.domain_key", &self.auth.domain_key),
            ("auth.scheme_placeholder", &self.auth.scheme_placeholder),
            ("auth.domain_placeholder", &self.auth.domain_placeholder),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        if self.auth.scheme_placeholder == self.auth.domain_placeholder {
            return Err(ConfigError::InvalidValue {
                field: "auth.domain_placeholder",
                reason: format!(
                    "'{}' is already used for the scheme",
                    self.auth.domain_placeholder
                ),
            }
            .into());
        }

        for (key, value) in &self.auth.fallbacks {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "auth.fallbacks",
                    reason: format!("fallback for '{}' is empty", key),
                }
                .into());
            }
        }

        Ok(())
    }
}
