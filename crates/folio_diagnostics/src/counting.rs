//! A sink that only tallies diagnostics.

use crate::diagnostic::Diagnostic;
use crate::level::Level;
use crate::sink::DiagnosticSink;
use folio_source::{FilePath, PathString};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Counts diagnostics per level without keeping them.
///
/// Nothing is deduplicated: every add is counted. Only the set of files with
/// errors is retained so [`file_has_error`](DiagnosticSink::file_has_error)
/// can be answered.
#[derive(Default)]
pub struct CountingSink {
    counts: [AtomicUsize; Level::ALL.len()],
    error_files: Mutex<HashSet<PathString>>,
}

impl CountingSink {
    /// Creates a sink with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of diagnostics added at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.counts[level.index()].load(Ordering::Acquire)
    }

    /// Returns the number of diagnostics added at any level.
    pub fn total(&self) -> usize {
        Level::ALL.iter().map(|&level| self.count(level)).sum()
    }
}

impl DiagnosticSink for CountingSink {
    fn has_error(&self) -> bool {
        self.count(Level::Error) > 0
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        self.error_files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(file.path())
    }

    fn add(&self, diagnostic: Diagnostic) {
        if diagnostic.level().is_error() {
            if let Some(file) = diagnostic.display_file() {
                self.error_files
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(file.clone());
            }
        }
        self.counts[diagnostic.level().index()].fetch_add(1, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_source::SourceInfo;

    #[test]
    fn counts_every_add() {
        let sink = CountingSink::new();
        let d = Diagnostic::warning("W001", "same", vec![]);
        sink.add(d.clone());
        sink.add(d);
        sink.add(Diagnostic::suggestion("S001", "tip", vec![]));
        assert_eq!(sink.count(Level::Warning), 2);
        assert_eq!(sink.count(Level::Suggestion), 1);
        assert_eq!(sink.total(), 3);
        assert!(!sink.has_error());
    }

    #[test]
    fn tracks_error_files() {
        let sink = CountingSink::new();
        sink.add(Diagnostic::error("E001", "x", vec![]).with_source(Some(SourceInfo::new("a.md", 2, 1))));
        sink.add(Diagnostic::warning("W001", "x", vec![]).with_source(Some(SourceInfo::at("b.md"))));
        assert!(sink.has_error());
        assert!(sink.file_has_error(&FilePath::new("a.md")));
        assert!(!sink.file_has_error(&FilePath::new("b.md")));
    }
}
