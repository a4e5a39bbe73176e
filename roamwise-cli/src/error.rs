//! Error types emitted by the Roamwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roamwise_core::{CatalogError, PlanError};
use roamwise_ranker::RankError;
use thiserror::Error;

/// Errors emitted by the Roamwise CLI.
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
        /// Name of the offending option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// An option held a value that could not be interpreted.
    #[error("invalid --{field} value {value:?}: {reason}")]
    InvalidValue {
        /// Name of the offending option.
        field: &'static str,
        /// Value as supplied.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the offending option.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the offending option.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the offending option.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the destination catalog failed.
    #[error(transparent)]
    Catalog(#[from] Box<CatalogError>),
    /// The ranker rejected the query.
    #[error("ranking failed: {0}")]
    Rank(#[from] RankError),
    /// The planner rejected the itinerary request.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// Creating the CSV export file failed.
    #[error("failed to create CSV export at {path:?}: {source}")]
    CreateExport {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Writing CSV rows failed.
    #[error("failed to write CSV export to {path:?}: {source}")]
    WriteExport {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// Serializing the recommendations failed.
    #[error("failed to serialize recommendations: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(Box::new(err))
    }
}
