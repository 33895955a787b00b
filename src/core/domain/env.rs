//! Env type.
//!
//! Represents a parsed .env secrets file with typed access.

use std::path::{Path, PathBuf};

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct Env {
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl Env {
    /// Parse an .env file from disk
    ///
    /// Malformed UTF-8 is replaced rather than rejected, so a stray legacy
    /// byte in one line does not hide every other entry.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes), path))
    }

    /// Parse .env content.
    ///
    /// Skips empty lines and comments (lines starting with #). Each remaining
    /// line is split on the first `=`; key and value are trimmed. Lines
    /// without `=` are ignored. Values are kept verbatim, quotes included.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                entries.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        Self {
            entries,
            path: path.into(),
        }
    }

    /// Get a value by key. The first matching line wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs, in file order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
