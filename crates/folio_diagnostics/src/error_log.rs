//! Thread-safe collecting sink that deduplicates diagnostics.

use crate::diagnostic::Diagnostic;
use crate::level::Level;
use crate::sink::DiagnosticSink;
use folio_source::{FilePath, PathString};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A collecting sink used by real builds.
///
/// Diagnostics are kept in insertion order. A diagnostic equal to one already
/// recorded (see [`Diagnostic`] identity) is dropped. The error count is kept
/// in an atomic so [`has_error`](DiagnosticSink::has_error) does not lock.
///
/// With [`with_max_per_file`](Self::with_max_per_file), at most that many
/// diagnostics are kept per display file. Errors past the cap are not kept
/// but still count for `has_error` and `file_has_error`.
pub struct ErrorLog {
    inner: Mutex<Inner>,
    error_count: AtomicUsize,
    max_per_file: Option<usize>,
}

#[derive(Default)]
struct Inner {
    diagnostics: Vec<Diagnostic>,
    seen: HashSet<Diagnostic>,
    per_file: HashMap<PathString, usize>,
    error_files: HashSet<PathString>,
    level_counts: [usize; Level::ALL.len()],
}

/// What [`ErrorLog::insert`] did with a diagnostic.
enum Outcome {
    Kept,
    Duplicate,
    Capped { max: usize },
}

impl ErrorLog {
    /// Creates an empty log without a per-file cap.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            error_count: AtomicUsize::new(0),
            max_per_file: None,
        }
    }

    /// Creates an empty log keeping at most `max` diagnostics per file.
    ///
    /// The cap applies to the diagnostics currently kept: [`take_all`](Self::take_all)
    /// starts a new batch with every file's count back at zero.
    pub fn with_max_per_file(max: usize) -> Self {
        Self {
            max_per_file: Some(max),
            ..Self::new()
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of distinct error-level diagnostics accepted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Acquire)
    }

    /// Returns the number of kept diagnostics at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.lock().level_counts[level.index()]
    }

    /// Returns the number of kept diagnostics.
    pub fn len(&self) -> usize {
        self.lock().diagnostics.len()
    }

    /// Returns `true` if no diagnostic is kept.
    pub fn is_empty(&self) -> bool {
        self.lock().diagnostics.is_empty()
    }

    /// Returns a snapshot of the kept diagnostics in insertion order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().diagnostics.clone()
    }

    /// Takes the kept diagnostics, leaving the list empty.
    ///
    /// Error state and deduplication history are kept, so taken diagnostics
    /// are not accepted again and `has_error` still reports them. Per-file
    /// cap counts are reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut inner = self.lock();
        inner.level_counts = Default::default();
        inner.per_file.clear();
        std::mem::take(&mut inner.diagnostics)
    }

    /// Records `diagnostic` under the lock. Logging happens after the guard is released.
    fn insert(&self, diagnostic: Diagnostic) -> Outcome {
        let mut inner = self.lock();
        if inner.seen.contains(&diagnostic) {
            return Outcome::Duplicate;
        }
        inner.seen.insert(diagnostic.clone());

        if diagnostic.level().is_error() {
            if let Some(file) = diagnostic.display_file() {
                inner.error_files.insert(file.clone());
            }
            self.error_count.fetch_add(1, Ordering::Release);
        }

        if let (Some(max), Some(file)) = (self.max_per_file, diagnostic.display_file()) {
            let kept = inner.per_file.entry(file.clone()).or_insert(0);
            if *kept >= max {
                return Outcome::Capped { max };
            }
            *kept += 1;
        }

        inner.level_counts[diagnostic.level().index()] += 1;
        inner.diagnostics.push(diagnostic);
        Outcome::Kept
    }

    /// Renders every kept diagnostic as one JSON object per line.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let diagnostics = self.diagnostics();
        let mut out = String::new();
        for diagnostic in &diagnostics {
            out.push_str(&diagnostic.render().to_json()?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for ErrorLog {
    fn has_error(&self) -> bool {
        self.error_count() > 0
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        self.lock().error_files.contains(file.path())
    }

    fn add(&self, diagnostic: Diagnostic) {
        match self.insert(diagnostic.clone()) {
            Outcome::Kept => {}
            Outcome::Duplicate => {
                tracing::trace!(code = diagnostic.code(), "dropping duplicate diagnostic");
            }
            Outcome::Capped { max } => {
                let file = diagnostic.display_file().map(|f| f.as_str()).unwrap_or_default();
                tracing::debug!(code = diagnostic.code(), file, max, "per-file diagnostic cap reached");
            }
        }
    }
}
