//! Signing identity selection.
//!
//! The release keystore is used when the signing properties file exists and
//! names a `storeFile`; every other case signs with the debug identity. A
//! missing file is the normal local-development setup, not an error.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants::signing;
use crate::core::domain::{Properties, ReleaseIdentity, SigningIdentity};
use crate::error::{Result, SigningError};

/// Choose the signing identity from the signing properties, if present.
///
/// A relative `storeFile` is resolved against `keystore_base`.
pub fn select_signing_identity(props: Option<&Properties>, keystore_base: &Path) -> SigningIdentity {
    let Some(props) = props else {
        return SigningIdentity::Debug;
    };

    let Some(store_file) = props.get(signing::STORE_FILE) else {
        return SigningIdentity::Debug;
    };

    let store_file = PathBuf::from(store_file);
    let store_file = if store_file.is_absolute() {
        store_file
    } else {
        keystore_base.join(store_file)
    };

    SigningIdentity::Release(ReleaseIdentity::new(
        store_file,
        props.get(signing::STORE_PASSWORD).map(String::from),
        props.get(signing::KEY_ALIAS).map(String::from),
        props.get(signing::KEY_PASSWORD).map(String::from),
    ))
}

/// Reads the signing properties file and selects an identity.
pub struct SigningSelector {
    properties_file: PathBuf,
    keystore_base: PathBuf,
}

impl SigningSelector {
    pub fn new(properties_file: impl Into<PathBuf>, keystore_base: impl Into<PathBuf>) -> Self {
        Self {
            properties_file: properties_file.into(),
            keystore_base: keystore_base.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.signing_file(), config.keystore_base())
    }

    /// Load the properties file, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::Read` if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<Properties>> {
        if !self.properties_file.exists() {
            debug!(
                path = %self.properties_file.display(),
                "signing properties absent"
            );
            return Ok(None);
        }

        let props = Properties::load(&self.properties_file).map_err(|source| SigningError::Read {
            path: self.properties_file.clone(),
            source,
        })?;
        Ok(Some(props))
    }

    /// Select the identity for this build.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::Read` if the file exists but cannot be read.
    pub fn select(&self) -> Result<SigningIdentity> {
        let props = self.load()?;
        let identity = select_signing_identity(props.as_ref(), &self.keystore_base);

        match &identity {
            SigningIdentity::Release(release) => {
                debug!(store_file = %release.store_file().display(), "using release signing");
                let missing = release.missing_fields();
                if !missing.is_empty() {
                    warn!(missing = ?missing, "release signing is incomplete");
                }
            }
            SigningIdentity::Debug => {
                if props.is_some() {
                    warn!(
                        path = %self.properties_file.display(),
                        "signing properties have no storeFile, using debug signing"
                    );
                } else {
                    debug!("using debug signing");
                }
            }
        }

        Ok(identity)
    }
}
