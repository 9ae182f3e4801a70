//! Diagnostic levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a diagnostic.
///
/// Ordered from least severe (`Info`) to most severe (`Error`) by declaration
/// order, so escalation is `max(current, requested)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Level {
    /// Informational output that does not indicate a problem.
    Info,
    /// An optional improvement to the content.
    Suggestion,
    /// A likely problem that does not fail the build.
    Warning,
    /// A problem that fails the build.
    Error,
}

impl Level {
    /// All levels from least to most severe.
    pub const ALL: [Level; 4] = [Level::Info, Level::Suggestion, Level::Warning, Level::Error];

    /// Returns `true` if this level is [`Error`](Level::Error).
    pub fn is_error(self) -> bool {
        self == Level::Error
    }

    /// Returns the name used in rendered records.
    pub fn name(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Suggestion => "Suggestion",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
