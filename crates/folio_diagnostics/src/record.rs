//! The structured record a diagnostic renders to for downstream tooling.

use crate::level::Level;
use chrono::{DateTime, Utc};
use folio_source::PathString;
use serde::Serialize;

/// A rendered diagnostic, serialized with the keys report consumers expect.
///
/// Optional fields are omitted from the output when absent rather than
/// written as `null`; `pull_request_only` is only ever written as `true`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogRecord {
    /// Severity name.
    #[serde(rename = "message_severity")]
    pub level: Level,
    /// Diagnostic code.
    #[serde(rename = "Code")]
    pub code: String,
    /// Rendered message.
    pub message: String,
    /// Display file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathString>,
    /// Message owner.
    #[serde(rename = "ms.author", skip_serializing_if = "Option::is_none")]
    pub ms_author: Option<String>,
    /// Starting line, `0` when unknown.
    pub line: u32,
    /// Ending line, `0` when unknown.
    pub end_line: u32,
    /// Starting column, `0` when unknown.
    pub column: u32,
    /// Ending column, `0` when unknown.
    pub end_column: u32,
    /// Always [`LogRecord::LOG_ITEM_TYPE`].
    pub log_item_type: &'static str,
    /// `Some(true)` for pull-request-only findings, otherwise `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_only: Option<bool>,
    /// Property path inside a structured document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_path: Option<String>,
    /// When the record was rendered.
    pub date_time: DateTime<Utc>,
}

impl LogRecord {
    /// The `log_item_type` of every diagnostic record.
    pub const LOG_ITEM_TYPE: &'static str = "user";

    /// Serializes the record to a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the record to a JSON value.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
