//! Configuration types deserialized from `folio.toml`.

use serde::Deserialize;
use std::fmt;

/// The parts of `folio.toml` this crate understands.
///
/// Unknown tables are ignored so the file can carry settings for other
/// build phases.
#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    /// Diagnostic collection settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// The `[diagnostics]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Which sink collects diagnostics.
    #[serde(default)]
    pub sink: SinkKind,
    /// Maximum number of diagnostics kept per file.
    #[serde(default)]
    pub max_per_file: Option<usize>,
}

/// The sink implementation selected by configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SinkKind {
    /// Keep and deduplicate every diagnostic.
    #[default]
    Collect,
    /// Only count diagnostics per level.
    Count,
    /// Collect, and let workers stop at the first error.
    FailFast,
    /// Discard everything.
    Null,
}

impl SinkKind {
    /// Returns `true` if this sink keeps diagnostics and can apply a per-file cap.
    pub fn retains_diagnostics(self) -> bool {
        matches!(self, SinkKind::Collect | SinkKind::FailFast)
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SinkKind::Collect => "collect",
            SinkKind::Count => "count",
            SinkKind::FailFast => "fail-fast",
            SinkKind::Null => "null",
        };
        f.write_str(name)
    }
}
