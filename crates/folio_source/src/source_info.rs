//! Line/column ranges inside logical files.

use crate::file_path::FilePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location inside a [`FilePath`].
///
/// Lines and columns are 1-indexed; `0` means the coordinate is unknown.
/// A source with only a file and all-zero coordinates points at the file as
/// a whole.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceInfo {
    /// The file this location belongs to.
    pub file: FilePath,
    /// The starting line.
    pub line: u32,
    /// The starting column.
    pub column: u32,
    /// The ending line.
    pub end_line: u32,
    /// The ending column.
    pub end_column: u32,
}

impl SourceInfo {
    /// Points at a whole file without positional detail.
    pub fn at(file: impl Into<FilePath>) -> Self {
        Self::new(file, 0, 0)
    }

    /// Creates a location at a single line and column.
    pub fn new(file: impl Into<FilePath>, line: u32, column: u32) -> Self {
        Self::with_range(file, line, column, 0, 0)
    }

    /// Creates a location spanning from `(line, column)` to `(end_line, end_column)`.
    pub fn with_range(
        file: impl Into<FilePath>,
        line: u32,
        column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Returns `true` if no line information is known.
    pub fn is_file_only(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_file_only() {
            write!(f, "{}", self.file)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}
