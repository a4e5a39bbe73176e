//! Command-line interface for the Roamwise destination recommender.
//!
//! `roamwise recommend` ranks the catalog for a travel concept and month
//! and drafts an itinerary for every shortlisted destination. `concepts`
//! and `regions` list the values the recommend filters accept.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use roamwise_core::Concept;

mod error;
mod export;
mod recommend;
mod render;
mod telemetry;

pub use error::CliError;
pub use telemetry::{TelemetryError, init_logging};

use recommend::{RecommendArgs, load_catalog, run_recommend};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_CONCEPT: &str = "concept";
pub(crate) const ARG_MONTH: &str = "month";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_COUNTRY: &str = "country";
pub(crate) const ARG_DAYS: &str = "days";
pub(crate) const ARG_PACE: &str = "pace";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_EXPORT_CSV: &str = "export-csv";
pub(crate) const ENV_CONCEPT: &str = "ROAMWISE_CMDS_RECOMMEND_CONCEPT";

/// Run the Roamwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, catalog
/// loading, ranking, planning or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Concepts => {
            let mut stdout = std::io::stdout().lock();
            write_concepts(&mut stdout)
        }
        Command::Regions(args) => {
            let mut stdout = std::io::stdout().lock();
            write_regions(&args, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roamwise",
    about = "Recommend travel destinations and draft itineraries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shortlist destinations and draft an itinerary for each.
    Recommend(RecommendArgs),
    /// List the travel concepts accepted by `--concept`.
    Concepts,
    /// List the regions present in the catalog.
    Regions(CatalogArgs),
}

/// Arguments for commands that only read the catalog.
#[derive(Debug, Clone, Default, clap::Args)]
struct CatalogArgs {
    /// Path to a catalog JSON file. Defaults to the bundled catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    catalog: Option<Utf8PathBuf>,
}

fn write_concepts(writer: &mut dyn Write) -> Result<(), CliError> {
    for concept in Concept::ALL {
        writeln!(writer, "{:<16}{}", concept.as_str(), concept.label())
            .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_regions(args: &CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    if let Some(path) = &args.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(args.catalog.as_deref())?;
    for region in catalog.regions() {
        writeln!(writer, "{region}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Confirm that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match roamwise_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
