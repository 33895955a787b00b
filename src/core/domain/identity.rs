//! Signing identity types.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

use crate::core::constants::signing;

/// The credential set used to sign the application package.
#[derive(Debug, Clone)]
pub enum SigningIdentity {
    /// Release keystore from the signing properties file.
    Release(ReleaseIdentity),
    /// The toolchain's pre-existing debug keystore.
    Debug,
}

impl SigningIdentity {
    /// Short name, as used for the build's signing config.
    pub fn name(&self) -> &'static str {
        match self {
            SigningIdentity::Release(_) => "release",
            SigningIdentity::Debug => "debug",
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, SigningIdentity::Release(_))
    }

    /// Release credentials, if selected.
    pub fn release(&self) -> Option<&ReleaseIdentity> {
        match self {
            SigningIdentity::Release(identity) => Some(identity),
            SigningIdentity::Debug => None,
        }
    }
}

impl fmt::Display for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Release keystore credentials.
///
/// Only `store_file` is guaranteed; the remaining properties may be absent
/// from the file, in which case the packager will reject the identity.
#[derive(Clone)]
pub struct ReleaseIdentity {
    pub store_file: PathBuf,
    pub store_password: Option<Zeroizing<String>>,
    pub key_alias: Option<String>,
    pub key_password: Option<Zeroizing<String>>,
}

impl ReleaseIdentity {
    pub fn new(
        store_file: PathBuf,
        store_password: Option<String>,
        key_alias: Option<String>,
        key_password: Option<String>,
    ) -> Self {
        Self {
            store_file,
            store_password: store_password.map(Zeroizing::new),
            key_alias,
            key_password: key_password.map(Zeroizing::new),
        }
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn store_password(&self) -> Option<&str> {
        self.store_password.as_deref().map(String::as_str)
    }

    pub fn key_alias(&self) -> Option<&str> {
        self.key_alias.as_deref()
    }

    pub fn key_password(&self) -> Option<&str> {
        self.key_password.as_deref().map(String::as_str)
    }

    /// Property names that were not set in the signing file.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.store_password.is_none() {
            missing.push(signing::STORE_PASSWORD);
        }
        if self.key_alias.is_none() {
            missing.push(signing::KEY_ALIAS);
        }
        if self.key_password.is_none() {
            missing.push(signing::KEY_PASSWORD);
        }
        missing
    }

    /// Whether the keystore file is present on disk.
    pub fn store_file_exists(&self) -> bool {
        self.store_file.is_file()
    }

    /// Serializable view, with passwords masked unless `reveal` is set.
    pub fn view(&self, reveal: bool) -> ReleaseView<'_> {
        ReleaseView {
            identity: self,
            reveal,
        }
    }
}

impl fmt::Debug for ReleaseIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseIdentity")
            .field("store_file", &self.store_file)
            .field("store_password", &mask(self.store_password()))
            .field("key_alias", &self.key_alias)
            .field("key_password", &mask(self.key_password()))
            .finish()
    }
}

/// Borrowed, serializable form of a [`ReleaseIdentity`].
pub struct ReleaseView<'a> {
    identity: &'a ReleaseIdentity,
    reveal: bool,
}

impl Serialize for ReleaseView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = self.identity;
        let (store_password, key_password) = if self.reveal {
            (
                id.store_password().map(String::from),
                id.key_password().map(String::from),
            )
        } else {
            (mask(id.store_password()), mask(id.key_password()))
        };

        let mut s = serializer.serialize_struct("ReleaseIdentity", 4)?;
        s.serialize_field(signing::STORE_FILE, &id.store_file)?;
        s.serialize_field(signing::STORE_PASSWORD, &store_password)?;
        s.serialize_field(signing::KEY_ALIAS, &id.key_alias)?;
        s.serialize_field(signing::KEY_PASSWORD, &key_password)?;
        s.end()
    }
}

/// Placeholder shown in place of a password.
pub const MASK: &str = "********";

fn mask(value: Option<&str>) -> Option<String> {
    value.map(|_| MASK.to_string())
}
