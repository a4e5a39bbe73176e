//! CSV export of a recommendation shortlist.
//!
//! The file starts with a UTF-8 byte order mark so spreadsheet tools pick
//! the right encoding for non-ASCII destination and dish names.

use std::io::Write;

use camino::Utf8Path;
use log::debug;
use roamwise_core::Destination;

use crate::CliError;
use crate::recommend::Recommendation;
use crate::render::best_months;

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Column headings, one row per recommended destination.
pub(crate) const HEADER: [&str; 8] = [
    "Destination",
    "Country",
    "Region",
    "Budget",
    "Concepts",
    "Best Months",
    "Foods",
    "Activities",
];

/// Write `recommendations` to a CSV file at `path`, replacing any existing
/// file.
pub(crate) fn write_csv(
    path: &Utf8Path,
    recommendations: &[Recommendation<'_>],
) -> Result<(), CliError> {
    let file = roamwise_fs::create_utf8_file(path).map_err(|source| CliError::CreateExport {
        path: path.to_path_buf(),
        source,
    })?;
    write_rows(file, recommendations).map_err(|source| CliError::WriteExport {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("exported {} rows to {path}", recommendations.len());
    Ok(())
}

pub(crate) fn write_rows<W: Write>(
    mut writer: W,
    recommendations: &[Recommendation<'_>],
) -> Result<(), csv::Error> {
    writer.write_all(BYTE_ORDER_MARK)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for recommendation in recommendations {
        csv_writer.write_record(row(recommendation.destination))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn row(destination: &Destination) -> [String; 8] {
    let concepts: Vec<&str> = destination
        .concepts
        .iter()
        .map(|concept| concept.label())
        .collect();
    let foods: Vec<&str> = destination
        .foods
        .iter()
        .map(|food| food.name.as_str())
        .collect();
    [
        destination.name.clone(),
        destination.country.clone(),
        destination.region.clone(),
        destination.budget.symbol().to_owned(),
        concepts.join(", "),
        best_months(destination),
        foods.join(", "),
        destination.activities.join(", "),
    ]
}
