//! Fatal errors that carry a diagnostic out of an aborted unit of work.

use crate::diagnostic::Diagnostic;
use std::error::Error as StdError;

/// A diagnostic raised as an error, with the failure that caused it if any.
///
/// Produced by [`Diagnostic::to_fatal`]. Build code propagates it with `?` to
/// abort the current file; the driver later hands it to
/// [`DiagnosticSink::add_fatal_range`](crate::DiagnosticSink::add_fatal_range)
/// so it is both logged and recorded.
#[derive(Debug, thiserror::Error)]
#[error("{}: {}", .diagnostic.code(), .diagnostic.message())]
pub struct FatalError {
    diagnostic: Diagnostic,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl FatalError {
    /// Wraps `diagnostic` as-is, without escalating its level.
    pub fn new(
        diagnostic: Diagnostic,
        cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self { diagnostic, cause }
    }

    /// The wrapped diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Consumes the error, returning the wrapped diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }

    /// The failure that caused this error, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl From<Diagnostic> for FatalError {
    fn from(diagnostic: Diagnostic) -> Self {
        diagnostic.into_fatal()
    }
}
