//! Unit tests for the CSV export.

use roamwise_core::test_support::{bare, bangkok, interlaken};
use roamwise_core::{Destination, Itinerary, Pace};
use rstest::rstest;

use super::*;
use super::helpers::Workspace;
use crate::export::{HEADER, write_csv, write_rows};
use crate::recommend::Recommendation;

fn shortlist(destinations: &[Destination]) -> Vec<Recommendation<'_>> {
    destinations
        .iter()
        .map(|destination| Recommendation {
            destination,
            score: 1.0,
            itinerary: Itinerary::new(destination.name.as_str(), Pace::Normal, Vec::new()),
        })
        .collect()
}

fn read_records(bytes: &[u8]) -> Vec<Vec<String>> {
    let body = bytes
        .strip_prefix(b"\xEF\xBB\xBF".as_slice())
        .expect("byte order mark");
    csv::Reader::from_reader(body)
        .records()
        .map(|record| {
            record
                .expect("csv record")
                .iter()
                .map(str::to_owned)
                .collect()
        })
        .collect()
}

#[rstest]
fn rows_join_multi_valued_columns() {
    let destinations = [interlaken(), bangkok()];
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &shortlist(&destinations)).expect("write rows");

    let header = csv::Reader::from_reader(
        buffer
            .strip_prefix(b"\xEF\xBB\xBF".as_slice())
            .expect("byte order mark"),
    )
    .headers()
    .expect("header row")
    .clone();
    assert_eq!(header.iter().collect::<Vec<_>>(), HEADER);

    let records = read_records(&buffer);
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        [
            "Interlaken",
            "Switzerland",
            "Europe",
            "$$$",
            "Adventure, Nature, Romantic",
            "6, 7, 8, 9",
            "Fondue, Rösti",
            "Paragliding, Jungfrau railway, Hiking",
        ]
    );
    assert_eq!(records[1][4], "City Nightlife, Foodie, Budget");
    assert_eq!(records[1][5], "1, 2, 3, 11, 12");
}

#[rstest]
fn destinations_without_pools_export_empty_columns() {
    let destinations = [bare("Quietville")];
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &shortlist(&destinations)).expect("write rows");
    let records = read_records(&buffer);
    assert_eq!(records[0][6], "");
    assert_eq!(records[0][7], "");
}

#[rstest]
fn empty_shortlist_writes_only_the_header() {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, &[]).expect("write rows");
    assert!(read_records(&buffer).is_empty());
    let text = String::from_utf8(buffer).expect("utf-8 csv");
    assert!(text.ends_with("Foods,Activities\n"), "{text}");
}

#[rstest]
fn export_creates_missing_directories() {
    let workspace = Workspace::new();
    let path = workspace.path("exports/trip_recommendations.csv");
    let destinations = [interlaken()];
    write_csv(&path, &shortlist(&destinations)).expect("export succeeds");

    let bytes = std::fs::read(&path).expect("read export");
    assert_eq!(read_records(&bytes).len(), 1);
}

#[rstest]
fn export_reports_unwritable_paths() {
    let workspace = Workspace::new();
    let blocker = workspace.path("blocker");
    super::helpers::write_utf8(&blocker, b"not a directory");
    let path = blocker.join("out.csv");

    let err = write_csv(&path, &[]).expect_err("parent is a file");
    match err {
        CliError::CreateExport { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected CreateExport, found {other:?}"),
    }
}
