//! Normalized logical paths used to attribute diagnostics to files.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// A logical path with normalized separators.
///
/// Backslashes are converted to `/` and any leading `./` segments are removed,
/// so `.\docs\a.md` and `docs/a.md` name the same file. Equality and hashing
/// are ordinal over the normalized text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PathString(String);

impl PathString {
    /// Creates a normalized path from any string-like value.
    pub fn new(path: impl Into<String>) -> Self {
        Self(normalize(path.into()))
    }

    /// Returns the normalized path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize(path: String) -> String {
    let path = if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path
    };
    let mut trimmed = path.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    if trimmed.len() == path.len() {
        path
    } else {
        trimmed.to_string()
    }
}

impl From<String> for PathString {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PathString {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathString> for String {
    fn from(path: PathString) -> Self {
        path.0
    }
}

impl Deref for PathString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PathString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PathString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PathString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathString({:?})", self.0)
    }
}
