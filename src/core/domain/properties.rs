//! Properties type.
//!
//! Parses Java-style `.properties` files such as `key.properties`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::Chars;

/// A parsed Java properties file.
///
/// Follows `java.util.Properties::load`: `#` and `!` comments, `=`, `:` or
/// whitespace separators, backslash line continuations and escape
/// sequences. A key that appears twice keeps its last value.
#[derive(Debug, Clone)]
pub struct Properties {
    entries: BTreeMap<String, String>,
    path: PathBuf,
}

impl Properties {
    /// Parse a properties file from disk.
    ///
    /// The file is decoded as ISO-8859-1, like `Properties.load(InputStream)`:
    /// every byte maps to the code point of the same value, so any content
    /// loads. Characters outside Latin-1 must be written as `\uXXXX`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let contents: String = bytes.iter().map(|&b| char::from(b)).collect();
        Ok(Self::parse(&contents, path))
    }

    /// Parse properties content.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let mut entries = BTreeMap::new();

        for line in logical_lines(contents) {
            let (key, value) = split_entry(&line);
            entries.insert(key, value);
        }

        Self {
            entries,
            path: path.into(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is defined
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Defined keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
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

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0c')
}

/// Join continuation lines and drop comments and blank lines.
fn logical_lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in contents.lines() {
        let line = raw.trim_start_matches(is_blank);

        if current.is_none() && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
        {
            continue;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        let buf = current.get_or_insert_with(String::new);

        if trailing % 2 == 1 {
            buf.push_str(&line[..line.len() - 1]);
        } else {
            buf.push_str(line);
            if let Some(done) = current.take() {
                lines.push(done);
            }
        }
    }

    if let Some(rest) = current {
        lines.push(rest);
    }

    lines
}

/// Split a logical line into an unescaped key and value.
fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                let rest = line[i..].trim_start_matches(is_blank);
                let offset = line.len() - rest.len();
                value_start = if rest.starts_with('=') || rest.starts_with(':') {
                    offset + 1
                } else {
                    offset
                };
                break;
            }
            _ => {}
        }
    }

    let value = line[value_start..].trim_start_matches(is_blank);
    (unescape(&line[..key_end]), unescape(value))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => match unicode_escape(&mut chars) {
                Some(decoded) => out.push(decoded),
                // Malformed escape: keep it literally rather than failing the build
                None => out.push_str("\\u"),
            },
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

/// Decode the digits of a `\uXXXX` escape, joining a UTF-16 surrogate pair
/// written as two consecutive escapes. Input is consumed only on success.
fn unicode_escape(chars: &mut Chars<'_>) -> Option<char> {
    let mut ahead = chars.clone();
    let unit = hex4(&mut ahead)?;

    let decoded = if (0xD800..0xDC00).contains(&unit) {
        if ahead.next() != Some('\\') || ahead.next() != Some('u') {
            return None;
        }
        let low = hex4(&mut ahead)?;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))?
    } else {
        char::from_u32(unit)?
    };

    *chars = ahead;
    Some(decoded)
}

fn hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let hex: String = chars.take(4).collect();
    if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        u32::from_str_radix(&hex, 16).ok()
    } else {
        None
    }
}
