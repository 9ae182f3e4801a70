//! A sink wrapper that lets workers stop at the first error.

use crate::diagnostic::Diagnostic;
use crate::error_log::ErrorLog;
use crate::fatal::FatalError;
use crate::sink::DiagnosticSink;
use folio_source::FilePath;
use std::sync::OnceLock;

/// Forwards diagnostics to an inner sink and remembers the first error.
///
/// Workers call [`check`](DiagnosticSink::check) between units of work and propagate
/// the returned [`FatalError`] with `?` once any error has been recorded.
/// Queries are answered by the inner sink.
pub struct FailFastSink<S = ErrorLog> {
    inner: S,
    first_error: OnceLock<Diagnostic>,
}

impl<S: DiagnosticSink> FailFastSink<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            first_error: OnceLock::new(),
        }
    }

    /// Returns the first error-level diagnostic added, if any.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.first_error.get()
    }

    /// Returns the wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl Default for FailFastSink<ErrorLog> {
    fn default() -> Self {
        Self::new(ErrorLog::new())
    }
}

impl<S: DiagnosticSink> DiagnosticSink for FailFastSink<S> {
    fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        self.inner.file_has_error(file)
    }

    /// Fails with the first error once one has been added.
    fn check(&self) -> Result<(), FatalError> {
        match self.first_error.get() {
            Some(diagnostic) => Err(diagnostic.to_fatal(None, false)),
            None => Ok(()),
        }
    }

    fn add(&self, diagnostic: Diagnostic) {
        if diagnostic.level().is_error() && self.first_error.get().is_none() {
            let _ = self.first_error.set(diagnostic.clone());
        }
        self.inner.add(diagnostic);
    }
}
