//! Resolved authentication settings.

use serde::Serialize;

/// Auth callback scheme and domain, both non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAuthConfig {
    pub scheme: String,
    pub domain: String,
}
