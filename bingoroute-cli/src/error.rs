//! Error types emitted by the BingoRoute CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use bingoroute_core::CatalogError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the BingoRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog could not be decoded or failed validation.
    #[error("catalog at {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: CatalogError,
    },
    /// A date option is not a `YYYY-MM-DD` calendar date.
    #[error("{field} {value:?} is not a YYYY-MM-DD date: {source}")]
    InvalidDate {
        /// Option that carried the date.
        field: &'static str,
        /// The rejected text.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The trip ends before it starts.
    #[error("{end} precedes {start}")]
    DateOrder {
        /// First day of the trip.
        start: chrono::NaiveDate,
        /// Last day of the trip.
        end: chrono::NaiveDate,
    },
    /// A numeric option is outside its accepted range.
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        /// Option that carried the number.
        field: &'static str,
        /// Human-readable description of the accepted range.
        expected: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize command output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
