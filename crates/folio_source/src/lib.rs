//! Logical file paths and source locations for build diagnostics.
//!
//! This crate provides [`PathString`] for normalized logical paths, [`FilePath`]
//! for paths tagged with the [`FileOrigin`] they were loaded from, and
//! [`SourceInfo`] for line/column ranges inside those files.

#![warn(missing_docs)]

pub mod file_path;
pub mod path_string;
pub mod source_info;

pub use file_path::{FileOrigin, FilePath};
pub use path_string::PathString;
pub use source_info::SourceInfo;
