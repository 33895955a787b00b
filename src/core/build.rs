//! Build assembly.
//!
//! Combines auth resolution, signing selection and packaging data into the
//! single [`ResolvedBuild`] a build script consumes.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants::signing;
use crate::core::domain::identity::MASK;
use crate::core::domain::{ResolvedAuthConfig, SigningIdentity};
use crate::core::lookup::Lookup;
use crate::core::resolver::Resolver;
use crate::core::signing::SigningSelector;
use crate::error::Result;

/// Everything the build needs from this resolver.
#[derive(Debug, Clone)]
pub struct ResolvedBuild {
    pub auth: ResolvedAuthConfig,
    /// Manifest placeholder name to value
    pub placeholders: BTreeMap<String, String>,
    pub signing: SigningIdentity,
    pub jni_excludes: Vec<String>,
    /// Whether the production secrets file was used
    pub production: bool,
}

/// Resolve the full build configuration.
///
/// Auth values are resolved first so a missing secret aborts before the
/// signing file is touched.
///
/// # Errors
///
/// Propagates resolution and signing errors.
pub fn resolve_build<L: Lookup>(config: &Config, lookup: L) -> Result<ResolvedBuild> {
    let resolver = Resolver::new(config, lookup);
    let production = resolver.secrets_file().production;
    let auth = resolver.resolve_auth()?;

    let mut placeholders = BTreeMap::new();
    placeholders.insert(config.auth.scheme_placeholder.clone(), auth.scheme.clone());
    placeholders.insert(config.auth.domain_placeholder.clone(), auth.domain.clone());

    let signing = SigningSelector::from_config(config).select()?;

    debug!(
        production,
        signing = signing.name(),
        placeholders = placeholders.len(),
        "build configuration resolved"
    );

    Ok(ResolvedBuild {
        auth,
        placeholders,
        signing,
        jni_excludes: config.packaging.jni_excludes.clone(),
        production,
    })
}

impl ResolvedBuild {
    /// JSON form. Passwords are masked unless `reveal` is set.
    pub fn to_json(&self, reveal: bool) -> Value {
        json!({
            "production": self.production,
            "auth": self.auth,
            "manifestPlaceholders": self.placeholders,
            "signing": signing_json(&self.signing, reveal),
            "jniExcludes": self.jni_excludes,
        })
    }

    /// Flat `key=value` lines, suitable for a Gradle properties file.
    ///
    /// Placeholders are emitted under their own names, signing values under
    /// `signing.*`, exclusions as a comma-separated `jniExcludes`.
    pub fn to_properties(&self, reveal: bool) -> String {
        let mut out = String::new();

        for (name, value) in &self.placeholders {
            out.push_str(&format!("{}={}\n", escape_key(name), escape_value(value)));
        }

        out.push_str(&format!("signing.config={}\n", self.signing.name()));
        if let Some(release) = self.signing.release() {
            let store_file = release.store_file().display().to_string();
            let (store_password, key_password) = if reveal {
                (release.store_password(), release.key_password())
            } else {
                (
                    release.store_password().map(|_| MASK),
                    release.key_password().map(|_| MASK),
                )
            };

            let fields = [
                (signing::STORE_FILE, Some(store_file.as_str())),
                (signing::STORE_PASSWORD, store_password),
                (signing::KEY_ALIAS, release.key_alias()),
                (signing::KEY_PASSWORD, key_password),
            ];
            for (key, value) in fields {
                if let Some(value) = value {
                    out.push_str(&format!(
                        "{}={}\n",
                        escape_key(&format!("signing.{key}")),
                        escape_value(value)
                    ));
                }
            }
        }

        out.push_str(&format!(
            "jniExcludes={}\n",
            escape_value(&self.jni_excludes.join(","))
        ));
        out
    }
}

/// JSON form of a signing identity.
pub fn signing_json(identity: &SigningIdentity, reveal: bool) -> Value {
    match identity {
        SigningIdentity::Debug => json!({ "config": "debug" }),
        SigningIdentity::Release(release) => {
            let mut value = json!({ "config": "release" });
            if let (Value::Object(map), Ok(Value::Object(fields))) =
                (&mut value, serde_json::to_value(release.view(reveal)))
            {
                map.extend(fields);
            }
            value
        }
    }
}

/// Escape a key for a Java properties file. Every space is escaped.
fn escape_key(key: &str) -> String {
    escape_property(key, true)
}

/// Escape a value for a Java properties file. Only a leading space is escaped.
fn escape_value(value: &str) -> String {
    escape_property(value, false)
}

/// Write `text` so that `Properties.load` reads it back unchanged.
///
/// Output is pure ASCII: characters outside printable ASCII become `\uXXXX`
/// UTF-16 escapes, so the file is valid both as ISO-8859-1 and as UTF-8.
fn escape_property(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        match ch {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    out
}
