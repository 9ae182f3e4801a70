//! Parsing and validation of the `[diagnostics]` section of `folio.toml`.
//!
//! This crate reads the build configuration file into a strongly-typed
//! [`FolioConfig`] and turns its [`DiagnosticsConfig`] into a ready-to-use
//! [`DiagnosticSink`](folio_diagnostics::DiagnosticSink).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::resolve_sink;
pub use types::*;
