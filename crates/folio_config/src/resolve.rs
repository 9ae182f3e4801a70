//! Turning a [`DiagnosticsConfig`] into a sink.

use crate::types::{DiagnosticsConfig, SinkKind};
use folio_diagnostics::{CountingSink, DiagnosticSink, ErrorLog, FailFastSink, NullSink};

/// Builds the sink selected by `config`.
pub fn resolve_sink(config: &DiagnosticsConfig) -> Box<dyn DiagnosticSink> {
    let error_log = || match config.max_per_file {
        Some(max) => ErrorLog::with_max_per_file(max),
        None => ErrorLog::new(),
    };
    tracing::debug!(sink = %config.sink, max_per_file = ?config.max_per_file, "creating diagnostic sink");
    match config.sink {
        SinkKind::Collect => Box::new(error_log()),
        SinkKind::Count => Box::new(CountingSink::new()),
        SinkKind::FailFast => Box::new(FailFastSink::new(error_log())),
        SinkKind::Null => Box::new(NullSink),
    }
}

impl DiagnosticsConfig {
    /// Builds the sink this configuration selects. See [`resolve_sink`].
    pub fn build_sink(&self) -> Box<dyn DiagnosticSink> {
        resolve_sink(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;
    use folio_diagnostics::{Diagnostic, FilePath, SourceInfo};

    fn error_in(file: &str) -> Diagnostic {
        Diagnostic::error("E001", "bad", vec![]).with_source(Some(SourceInfo::at(file)))
    }

    #[test]
    fn default_config_collects() {
        let sink = DiagnosticsConfig::default().build_sink();
        sink.add(error_in("a.md"));
        assert!(sink.has_error());
        assert!(sink.file_has_error(&FilePath::new("a.md")));
    }

    #[test]
    fn each_tracking_kind_reports_errors() {
        for kind in ["collect", "count", "fail-fast"] {
            let config = load_config_from_str(&format!("[diagnostics]\nsink = \"{kind}\"\n")).unwrap();
            let sink = config.diagnostics.build_sink();
            assert!(!sink.has_error(), "{kind}");
            sink.add(error_in("a.md"));
            assert!(sink.has_error(), "{kind}");
        }
    }

    #[test]
    fn fail_fast_kind_stops_workers_after_first_error() {
        let config = load_config_from_str("[diagnostics]\nsink = \"fail-fast\"\n").unwrap();
        let sink = config.diagnostics.build_sink();
        sink.add(Diagnostic::warning("W001", "meh", vec![]));
        assert!(sink.check().is_ok());

        sink.add(error_in("a.md"));
        let err = sink.check().unwrap_err();
        assert_eq!(err.diagnostic().code(), "E001");
        assert!(sink.file_has_error(&FilePath::new("a.md")));
    }

    #[test]
    fn collect_kind_never_stops_workers() {
        let config = load_config_from_str("[diagnostics]\nsink = \"collect\"\n").unwrap();
        let sink = config.diagnostics.build_sink();
        sink.add(error_in("a.md"));
        assert!(sink.has_error());
        assert!(sink.check().is_ok());
    }

    #[test]
    #[should_panic(expected = "NullSink does not track diagnostics")]
    fn null_kind_discards() {
        let config = DiagnosticsConfig {
            sink: SinkKind::Null,
            max_per_file: None,
        };
        let sink = resolve_sink(&config);
        sink.add(error_in("a.md"));
        sink.has_error();
    }
}
