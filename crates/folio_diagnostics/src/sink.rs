//! The sink abstraction diagnostics are pushed into, and the discarding sink.

use crate::diagnostic::Diagnostic;
use crate::fatal::FatalError;
use crate::report::{FatalReporter, TracingReporter};
use folio_source::FilePath;
use std::sync::Arc;

/// Accumulates diagnostics and answers whether errors were recorded.
///
/// Sinks are shared between workers, so every method takes `&self` and
/// implementations synchronize internally. A query made after an
/// [`add`](Self::add) has returned reflects that add.
///
/// Errors are attributed to files by [`Diagnostic::display_file`], so a
/// diagnostic with an original path override counts against the override
/// path, not its source file.
pub trait DiagnosticSink: Send + Sync {
    /// Returns `true` if any error-level diagnostic has been accepted.
    fn has_error(&self) -> bool;

    /// Returns `true` if an error-level diagnostic has been accepted for `file`.
    fn file_has_error(&self, file: &FilePath) -> bool;

    /// Accepts one diagnostic.
    fn add(&self, diagnostic: Diagnostic);

    /// Fails once this sink wants workers to stop their unit of work.
    ///
    /// Sinks that never abort return `Ok(())`; see
    /// [`FailFastSink`](crate::FailFastSink).
    fn check(&self) -> Result<(), FatalError> {
        Ok(())
    }

    /// Accepts `diagnostic` if there is one.
    fn add_if_some(&self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.add(diagnostic);
        }
    }

    /// Accepts each diagnostic in iteration order.
    fn add_range<I>(&self, diagnostics: I)
    where
        I: IntoIterator<Item = Diagnostic>,
        Self: Sized,
    {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// Logs each fatal error through `tracing`, then accepts its diagnostic.
    fn add_fatal_range<I>(&self, errors: I)
    where
        I: IntoIterator<Item = FatalError>,
        Self: Sized,
    {
        self.add_fatal_range_with(&TracingReporter, errors);
    }

    /// Reports each fatal error to `reporter`, then accepts its diagnostic.
    ///
    /// A reporter failure is logged and does not stop the diagnostic, or any
    /// later one, from being accepted.
    fn add_fatal_range_with<I>(&self, reporter: &dyn FatalReporter, errors: I)
    where
        I: IntoIterator<Item = FatalError>,
        Self: Sized,
    {
        for error in errors {
            if let Err(report_err) = reporter.report(&error) {
                tracing::warn!(
                    code = error.diagnostic().code(),
                    error = %report_err,
                    "failed to report fatal error"
                );
            }
            self.add(error.into_diagnostic());
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn has_error(&self) -> bool {
        (**self).has_error()
    }

    fn check(&self) -> Result<(), FatalError> {
        (**self).check()
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        (**self).file_has_error(file)
    }

    fn add(&self, diagnostic: Diagnostic) {
        (**self).add(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn has_error(&self) -> bool {
        (**self).has_error()
    }

    fn check(&self) -> Result<(), FatalError> {
        (**self).check()
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        (**self).file_has_error(file)
    }

    fn add(&self, diagnostic: Diagnostic) {
        (**self).add(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn has_error(&self) -> bool {
        (**self).has_error()
    }

    fn check(&self) -> Result<(), FatalError> {
        (**self).check()
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        (**self).file_has_error(file)
    }

    fn add(&self, diagnostic: Diagnostic) {
        (**self).add(diagnostic);
    }
}

/// A sink that drops every diagnostic.
///
/// Use it where diagnostics are deliberately unobserved. It keeps no state,
/// so [`has_error`](DiagnosticSink::has_error) and
/// [`file_has_error`](DiagnosticSink::file_has_error) panic: a caller asking
/// them needs a real sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

/// A shared [`NullSink`].
pub static NULL_SINK: NullSink = NullSink;

impl DiagnosticSink for NullSink {
    fn has_error(&self) -> bool {
        panic!("NullSink does not track diagnostics; has_error needs a collecting sink")
    }

    fn file_has_error(&self, file: &FilePath) -> bool {
        panic!("NullSink does not track diagnostics; file_has_error({file}) needs a collecting sink")
    }

    fn add(&self, _diagnostic: Diagnostic) {}
}
