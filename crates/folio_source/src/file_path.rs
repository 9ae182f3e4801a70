//! Logical file references tagged with where the file came from.

use crate::path_string::PathString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a logical file was loaded from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub enum FileOrigin {
    /// A file in the main content set being built.
    #[default]
    Main,
    /// A file produced by a redirection entry.
    Redirection,
    /// A file resolved from a fallback content set.
    Fallback,
    /// A file pulled in from a dependency.
    Dependency,
    /// A file generated during the build.
    Generated,
}

impl FileOrigin {
    /// Returns the lowercase name used in display output.
    pub fn name(self) -> &'static str {
        match self {
            FileOrigin::Main => "main",
            FileOrigin::Redirection => "redirection",
            FileOrigin::Fallback => "fallback",
            FileOrigin::Dependency => "dependency",
            FileOrigin::Generated => "generated",
        }
    }
}

/// A logical file: a normalized path plus its [`FileOrigin`].
///
/// Two `FilePath`s with the same path but different origins are different
/// files. Diagnostics are attributed to files by their path alone, see
/// [`FilePath::path`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct FilePath {
    /// The normalized logical path.
    pub path: PathString,
    /// Where the file was loaded from.
    #[serde(default)]
    pub origin: FileOrigin,
}

impl FilePath {
    /// Creates a file path in the main content set.
    pub fn new(path: impl Into<PathString>) -> Self {
        Self::with_origin(path, FileOrigin::Main)
    }

    /// Creates a file path with an explicit origin.
    pub fn with_origin(path: impl Into<PathString>, origin: FileOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    /// Returns the normalized path.
    pub fn path(&self) -> &PathString {
        &self.path
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathString> for FilePath {
    fn from(path: PathString) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            FileOrigin::Main => write!(f, "{}", self.path),
            origin => write!(f, "{} ({})", self.path, origin.name()),
        }
    }
}
