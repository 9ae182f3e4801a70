//! End-to-end sink behavior under concurrent producers.

use folio_diagnostics::{
    CountingSink, Diagnostic, DiagnosticSink, ErrorLog, FailFastSink, FatalError, FilePath, Level,
    NullSink, ReportError, SourceInfo, NULL_SINK,
};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

fn file_name(i: usize) -> String {
    if i < 60 {
        format!("docs/error-{}.md", i % 10)
    } else {
        format!("docs/warn-{}.md", i % 5)
    }
}

fn finding(i: usize) -> Diagnostic {
    let level = if i < 60 { Level::Error } else { Level::Warning };
    Diagnostic::new(level, "content-check", "finding {0}", vec![i.into()])
        .with_source(Some(SourceInfo::new(file_name(i).as_str(), 1, 1)))
}

fn hammer(sink: &(impl DiagnosticSink + ?Sized)) {
    (0..100usize).into_par_iter().for_each(|i| sink.add(finding(i)));
}

fn assert_error_files(sink: &(impl DiagnosticSink + ?Sized)) {
    assert!(sink.has_error());
    for n in 0..10 {
        let file = FilePath::new(format!("docs/error-{n}.md"));
        assert!(sink.file_has_error(&file), "{file} should have an error");
    }
    for n in 0..5 {
        let file = FilePath::new(format!("docs/warn-{n}.md"));
        assert!(!sink.file_has_error(&file), "{file} should not have an error");
    }
    assert!(!sink.file_has_error(&FilePath::new("docs/untouched.md")));
}

#[test]
fn error_log_under_concurrent_adds() {
    let log = ErrorLog::new();
    hammer(&log);
    assert_error_files(&log);
    assert_eq!(log.len(), 100);
    assert_eq!(log.error_count(), 60);
    assert_eq!(log.count(Level::Warning), 40);
}

#[test]
fn counting_sink_under_concurrent_adds() {
    let sink = CountingSink::new();
    hammer(&sink);
    assert_error_files(&sink);
    assert_eq!(sink.count(Level::Error), 60);
    assert_eq!(sink.total(), 100);
}

#[test]
fn fail_fast_sink_under_concurrent_adds() {
    let sink: FailFastSink = FailFastSink::default();
    hammer(&sink);
    assert_error_files(&sink);
    let first = sink.check().unwrap_err();
    assert_eq!(first.diagnostic().level(), Level::Error);
}

#[test]
fn concurrent_duplicates_collapse() {
    let log = ErrorLog::new();
    (0..100usize)
        .into_par_iter()
        .for_each(|i| log.add(finding(i % 10).with_ms_author(Some(format!("worker-{i}").as_str()))));
    assert_eq!(log.len(), 10);
    assert_eq!(log.error_count(), 10);
}

#[test]
fn null_sink_discards_and_refuses_queries() {
    NULL_SINK.add(finding(0));
    NULL_SINK.add_range((0..10).map(finding));

    let has_error = catch_unwind(AssertUnwindSafe(|| NullSink.has_error()));
    assert!(has_error.is_err());

    let file = FilePath::new("docs/error-0.md");
    let file_has_error = catch_unwind(AssertUnwindSafe(|| NullSink.file_has_error(&file)));
    assert!(file_has_error.is_err());
}

#[test]
fn fatal_signals_are_logged_and_aggregated() {
    let reports = AtomicUsize::new(0);
    let flaky = |_: &FatalError| -> Result<(), ReportError> {
        match reports.fetch_add(1, Ordering::SeqCst) {
            0 => Err(ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "log pipe closed",
            ))),
            _ => Ok(()),
        }
    };

    let log = ErrorLog::new();
    let signals = vec![
        finding(3).to_fatal(None, false),
        finding(70).to_fatal(None, false),
    ];
    log.add_fatal_range_with(&flaky, signals);

    assert_eq!(reports.load(Ordering::SeqCst), 2);
    assert!(log.has_error());
    assert_eq!(log.len(), 2);
    assert_eq!(log.diagnostics()[1].level(), Level::Warning);
}

#[test]
fn boxed_sinks_are_interchangeable() {
    let sinks: Vec<Box<dyn DiagnosticSink>> = vec![
        Box::new(ErrorLog::new()),
        Box::new(CountingSink::new()),
        Box::new(FailFastSink::new(ErrorLog::new())),
    ];
    for sink in &sinks {
        hammer(&**sink);
        assert_error_files(&**sink);
    }
}
