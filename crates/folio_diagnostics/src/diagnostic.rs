//! Immutable diagnostic values with identity-preserving derivations.

use crate::fatal::FatalError;
use crate::level::Level;
use crate::message::{format_message, MessageArg};
use crate::record::LogRecord;
use chrono::{DateTime, Utc};
use folio_source::{PathString, SourceInfo};
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Every field of a [`Diagnostic`], used to build one directly.
///
/// `message` is the already rendered text; `message_args` are kept for
/// structured re-rendering only.
#[derive(Clone, Debug)]
pub struct DiagnosticParts {
    /// The severity.
    pub level: Level,
    /// A stable short identifier such as `"E001"` or `"invalid-link"`.
    pub code: String,
    /// The rendered message.
    pub message: String,
    /// The arguments the message was rendered from.
    pub message_args: Vec<MessageArg>,
    /// Where the problem was found.
    pub source: Option<SourceInfo>,
    /// Dotted path to the offending field of a structured document.
    pub property_path: Option<String>,
    /// Path to report instead of the source file.
    pub original_path: Option<PathString>,
    /// Whether the finding only matters for pull request validation.
    pub pull_request_only: bool,
    /// Owner of the message in generated reports.
    pub ms_author: Option<String>,
}

/// One finding produced while building content.
///
/// A `Diagnostic` is immutable and cheap to clone; clones share the same
/// instance, which [`ptr_eq`](Self::ptr_eq) detects. The `with_*` methods
/// return a handle to the same instance when the requested value is already
/// in place, and a new instance otherwise.
///
/// Equality and hashing use [`DiagnosticKey`]: message arguments and
/// `ms_author` are ignored, so two diagnostics that differ only there are
/// the same finding.
#[derive(Clone)]
pub struct Diagnostic(Arc<DiagnosticParts>);

/// The fields that decide whether two diagnostics are the same finding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiagnosticKey<'a> {
    /// The severity.
    pub level: Level,
    /// The code.
    pub code: &'a str,
    /// The rendered message.
    pub message: &'a str,
    /// The property path.
    pub property_path: Option<&'a str>,
    /// The source location.
    pub source: Option<&'a SourceInfo>,
    /// The display path override.
    pub original_path: Option<&'a PathString>,
    /// The pull-request-only flag.
    pub pull_request_only: bool,
}

impl Diagnostic {
    /// Creates a diagnostic by rendering `template` with `args`.
    ///
    /// See [`format_message`] for the template syntax.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty.
    pub fn new(level: Level, code: impl Into<String>, template: &str, args: Vec<MessageArg>) -> Self {
        let message = format_message(template, &args);
        Self::from_parts(DiagnosticParts {
            level,
            code: code.into(),
            message,
            message_args: args,
            source: None,
            property_path: None,
            original_path: None,
            pull_request_only: false,
            ms_author: None,
        })
    }

    /// Creates an error diagnostic.
    pub fn error(code: impl Into<String>, template: &str, args: Vec<MessageArg>) -> Self {
        Self::new(Level::Error, code, template, args)
    }

    /// Creates a warning diagnostic.
    pub fn warning(code: impl Into<String>, template: &str, args: Vec<MessageArg>) -> Self {
        Self::new(Level::Warning, code, template, args)
    }

    /// Creates a suggestion diagnostic.
    pub fn suggestion(code: impl Into<String>, template: &str, args: Vec<MessageArg>) -> Self {
        Self::new(Level::Suggestion, code, template, args)
    }

    /// Creates a diagnostic from all of its fields.
    ///
    /// # Panics
    ///
    /// Panics if `parts.code` is empty.
    pub fn from_parts(parts: DiagnosticParts) -> Self {
        assert!(!parts.code.is_empty(), "diagnostic code must not be empty");
        Self(Arc::new(parts))
    }

    /// Returns `true` if both handles refer to the same instance.
    pub fn ptr_eq(a: &Diagnostic, b: &Diagnostic) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// The severity.
    pub fn level(&self) -> Level {
        self.0.level
    }

    /// The code.
    pub fn code(&self) -> &str {
        &self.0.code
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// The arguments the message was rendered from.
    pub fn message_args(&self) -> &[MessageArg] {
        &self.0.message_args
    }

    /// The source location, if known.
    pub fn source(&self) -> Option<&SourceInfo> {
        self.0.source.as_ref()
    }

    /// The property path, if any.
    pub fn property_path(&self) -> Option<&str> {
        self.0.property_path.as_deref()
    }

    /// The display path override, if any.
    pub fn original_path(&self) -> Option<&PathString> {
        self.0.original_path.as_ref()
    }

    /// Whether the finding only matters for pull request validation.
    pub fn pull_request_only(&self) -> bool {
        self.0.pull_request_only
    }

    /// The message owner, if any.
    pub fn ms_author(&self) -> Option<&str> {
        self.0.ms_author.as_deref()
    }

    /// Returns a copy of all fields.
    pub fn to_parts(&self) -> DiagnosticParts {
        (*self.0).clone()
    }

    /// Returns the identity projection used for equality and hashing.
    pub fn key(&self) -> DiagnosticKey<'_> {
        DiagnosticKey {
            level: self.0.level,
            code: &self.0.code,
            message: &self.0.message,
            property_path: self.0.property_path.as_deref(),
            source: self.0.source.as_ref(),
            original_path: self.0.original_path.as_ref(),
            pull_request_only: self.0.pull_request_only,
        }
    }

    /// The file this diagnostic is reported against.
    ///
    /// The original path override wins over the source file.
    pub fn display_file(&self) -> Option<&PathString> {
        self.0
            .original_path
            .as_ref()
            .or_else(|| self.0.source.as_ref().map(|s| s.file.path()))
    }

    fn derive(&self, change: impl FnOnce(&mut DiagnosticParts)) -> Diagnostic {
        let mut parts = self.to_parts();
        change(&mut parts);
        Diagnostic(Arc::new(parts))
    }

    /// Returns this diagnostic with a different level.
    pub fn with_level(&self, level: Level) -> Diagnostic {
        if level == self.0.level {
            return self.clone();
        }
        self.derive(|p| p.level = level)
    }

    /// Returns this diagnostic reported against `original_path` instead of its source file.
    pub fn with_original_path(&self, original_path: Option<PathString>) -> Diagnostic {
        if original_path == self.0.original_path {
            return self.clone();
        }
        self.derive(|p| p.original_path = original_path)
    }

    /// Returns this diagnostic attached to `source`.
    ///
    /// Always creates a new instance.
    pub fn with_source(&self, source: Option<SourceInfo>) -> Diagnostic {
        self.derive(|p| p.source = source)
    }

    /// Returns this diagnostic attributed to `ms_author`.
    pub fn with_ms_author(&self, ms_author: Option<&str>) -> Diagnostic {
        if ms_author == self.ms_author() {
            return self.clone();
        }
        self.derive(|p| p.ms_author = ms_author.map(str::to_string))
    }

    /// Returns this diagnostic pointing at `property_path`.
    pub fn with_property_path(&self, property_path: Option<&str>) -> Diagnostic {
        if property_path == self.property_path() {
            return self.clone();
        }
        self.derive(|p| p.property_path = property_path.map(str::to_string))
    }

    /// Returns this diagnostic with the pull-request-only flag set to `value`.
    pub fn with_pull_request_only(&self, value: bool) -> Diagnostic {
        if value == self.0.pull_request_only {
            return self.clone();
        }
        self.derive(|p| p.pull_request_only = value)
    }

    /// Renders the structured record, stamped with the current time.
    pub fn render(&self) -> LogRecord {
        self.render_at(Utc::now())
    }

    /// Renders the structured record with an explicit timestamp.
    ///
    /// Positional fields are zero when there is no source, and also when an
    /// original path override is set, since the source position does not
    /// apply to the overriding path.
    pub fn render_at(&self, date_time: DateTime<Utc>) -> LogRecord {
        let position = match (&self.0.original_path, &self.0.source) {
            (None, Some(source)) => Some(source),
            _ => None,
        };
        LogRecord {
            level: self.0.level,
            code: self.0.code.clone(),
            message: self.0.message.clone(),
            file: self.display_file().cloned(),
            ms_author: self.0.ms_author.clone(),
            line: position.map_or(0, |s| s.line),
            end_line: position.map_or(0, |s| s.end_line),
            column: position.map_or(0, |s| s.column),
            end_column: position.map_or(0, |s| s.end_column),
            log_item_type: LogRecord::LOG_ITEM_TYPE,
            pull_request_only: self.0.pull_request_only.then_some(true),
            property_path: self.0.property_path.clone(),
            date_time,
        }
    }

    /// Wraps this diagnostic into a [`FatalError`] that aborts the current unit of work.
    ///
    /// With `force_error` the diagnostic is escalated to [`Level::Error`] first.
    pub fn to_fatal(
        &self,
        cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
        force_error: bool,
    ) -> FatalError {
        let diagnostic = if force_error {
            self.with_level(Level::Error)
        } else {
            self.clone()
        };
        FatalError::new(diagnostic, cause)
    }

    /// Shorthand for `to_fatal(None, true)`.
    pub fn into_fatal(self) -> FatalError {
        self.to_fatal(None, true)
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        Diagnostic::ptr_eq(self, other) || self.key() == other.key()
    }
}

impl Eq for Diagnostic {}

impl Hash for Diagnostic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.render().to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
