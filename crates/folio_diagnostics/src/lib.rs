//! Build diagnostics: immutable findings, structured rendering, and sinks.
//!
//! A [`Diagnostic`] is an immutable, cheaply cloneable record of one problem
//! found while building content. Derivations such as
//! [`with_level`](Diagnostic::with_level) return the same instance when nothing
//! changes. [`render`](Diagnostic::render) produces the [`LogRecord`] consumed by
//! downstream tooling. Diagnostics are pushed into a [`DiagnosticSink`]; the
//! collecting [`ErrorLog`], the tallying [`CountingSink`], the aborting
//! [`FailFastSink`] and the discarding [`NullSink`] are provided.

#![warn(missing_docs)]

pub mod counting;
pub mod diagnostic;
pub mod error_log;
pub mod fail_fast;
pub mod fatal;
pub mod level;
pub mod message;
pub mod record;
pub mod report;
pub mod sink;

pub use counting::CountingSink;
pub use diagnostic::{Diagnostic, DiagnosticKey, DiagnosticParts};
pub use error_log::ErrorLog;
pub use fail_fast::FailFastSink;
pub use fatal::FatalError;
pub use level::{Level, ParseLevelError};
pub use message::{format_message, MessageArg};
pub use record::LogRecord;
pub use report::{FatalReporter, ReportError, TracingReporter};
pub use sink::{DiagnosticSink, NullSink, NULL_SINK};

pub use folio_source::{FileOrigin, FilePath, PathString, SourceInfo};
