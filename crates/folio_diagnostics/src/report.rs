//! Transports that fatal errors are reported to before they are recorded.

use crate::fatal::FatalError;
use std::error::Error as StdError;

/// Errors a [`FatalReporter`] can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the underlying transport failed.
    #[error("failed to write fatal error report: {0}")]
    Io(#[from] std::io::Error),

    /// The transport rejected the report.
    #[error("fatal error report rejected: {0}")]
    Rejected(String),
}

/// Emits a fatal error to an external log or telemetry transport.
pub trait FatalReporter: Send + Sync {
    /// Reports one fatal error.
    fn report(&self, error: &FatalError) -> Result<(), ReportError>;
}

impl<F> FatalReporter for F
where
    F: Fn(&FatalError) -> Result<(), ReportError> + Send + Sync,
{
    fn report(&self, error: &FatalError) -> Result<(), ReportError> {
        self(error)
    }
}

/// Reports fatal errors as `tracing` error events.
///
/// Each event carries the diagnostic code, display file, line and the
/// cause chain as fields. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl FatalReporter for TracingReporter {
    fn report(&self, error: &FatalError) -> Result<(), ReportError> {
        let diagnostic = error.diagnostic();
        let file = diagnostic.display_file().map(|f| f.as_str()).unwrap_or_default();
        let line = diagnostic.source().map_or(0, |s| s.line);
        let cause = cause_chain(error);
        tracing::error!(
            code = diagnostic.code(),
            file,
            line,
            cause = cause.as_deref(),
            "{}",
            diagnostic.message()
        );
        Ok(())
    }
}

fn cause_chain(error: &FatalError) -> Option<String> {
    let mut current: Option<&(dyn StdError + 'static)> = error.source();
    let mut parts = Vec::new();
    while let Some(err) = current {
        parts.push(err.to_string());
        current = err.source();
    }
    (!parts.is_empty()).then(|| parts.join(": "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;

    #[test]
    fn tracing_reporter_never_fails() {
        let err = Diagnostic::error("E100", "boom", vec![]).into_fatal();
        assert!(TracingReporter.report(&err).is_ok());
    }

    #[test]
    fn cause_chain_joins_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Diagnostic::error("E101", "write failed", vec![]).to_fatal(Some(Box::new(io)), true);
        assert_eq!(cause_chain(&err).as_deref(), Some("disk gone"));

        let bare = Diagnostic::error("E102", "bare", vec![]).into_fatal();
        assert_eq!(cause_chain(&bare), None);
    }

    #[test]
    fn closures_are_reporters() {
        let reject = |_: &FatalError| -> Result<(), ReportError> {
            Err(ReportError::Rejected("offline".to_string()))
        };
        let err = Diagnostic::error("E103", "x", vec![]).into_fatal();
        let result = reject.report(&err);
        assert_eq!(
            result.unwrap_err().to_string(),
            "fatal error report rejected: offline"
        );
    }
}
