//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::*;
use super::helpers::Workspace;
use crate::recommend::run_recommend_with;

struct RecommendWorld {
    workspace: Workspace,
    catalog: RefCell<Option<Utf8PathBuf>>,
    export: RefCell<Option<Utf8PathBuf>>,
    options: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            catalog: RefCell::new(None),
            export: RefCell::new(None),
            options: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn set_options(&self, options: &str) {
        self.options
            .replace(options.split_whitespace().map(str::to_owned).collect());
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["roamwise".to_owned(), "recommend".to_owned()];
        if let Some(path) = self.catalog.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), path.as_str().to_owned()]);
        }
        if let Some(path) = self.export.borrow().as_ref() {
            argv.extend([format!("--{ARG_EXPORT_CSV}"), path.as_str().to_owned()]);
        }
        argv.extend(self.options.borrow().iter().cloned());
        argv
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn assert_succeeded(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }

    fn with_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the bundled catalog")]
fn bundled_catalog(#[from(world)] world: &RecommendWorld) {
    world.catalog.replace(None);
}

#[given("the sample catalog file")]
fn sample_catalog_file(#[from(world)] world: &RecommendWorld) {
    let path = world.workspace.sample_catalog_file();
    world.catalog.replace(Some(path));
}

#[given("a catalog path that does not exist")]
fn missing_catalog_path(#[from(world)] world: &RecommendWorld) {
    let path = world.workspace.path("missing/catalog.json");
    world.catalog.replace(Some(path));
}

#[given("a CSV export path")]
fn csv_export_path(#[from(world)] world: &RecommendWorld) {
    let path = world.workspace.path("exports/trip_recommendations.csv");
    world.export.replace(Some(path));
}

#[given("the options --concept adventure --month 7 --count 2 --budget high --format json")]
fn adventure_json_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--concept adventure --month 7 --count 2 --budget high --format json");
}

#[given("the options --concept adventure --month 7 --budget high --days 2")]
fn adventure_two_day_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--concept adventure --month 7 --budget high --days 2");
}

#[given("the options --concept city-nightlife --country Switzerland")]
fn nightlife_in_switzerland_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--concept city-nightlife --country Switzerland");
}

#[given("the options --month 7")]
fn month_only_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--month 7");
}

#[given("the options --concept nature --days 9")]
fn long_trip_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--concept nature --days 9");
}

#[given("the options --concept nature")]
fn nature_options(#[from(world)] world: &RecommendWorld) {
    world.set_options("--concept nature");
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
        other => panic!("expected recommend command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    world.assert_succeeded();
}

#[then("the command succeeds and prints 2 JSON recommendations")]
fn command_prints_json(#[from(world)] world: &RecommendWorld) {
    world.assert_succeeded();
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout_text()).expect("output should be JSON");
    let recommendations = value.as_array().expect("JSON array");
    assert_eq!(recommendations.len(), 2);
    for recommendation in recommendations {
        assert_eq!(recommendation["destination"]["budget"], "high");
    }
}

#[then("every itinerary lasts 3 days")]
fn itineraries_last_three_days(#[from(world)] world: &RecommendWorld) {
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout_text()).expect("output should be JSON");
    for recommendation in value.as_array().expect("JSON array") {
        let days = recommendation["itinerary"]["days"]
            .as_array()
            .expect("itinerary days");
        assert_eq!(days.len(), 3);
    }
}

#[then("the CSV export lists Interlaken then Queenstown")]
fn csv_lists_destinations(#[from(world)] world: &RecommendWorld) {
    let path = world.export.borrow().clone().expect("export path");
    let text = std::fs::read_to_string(&path).expect("read export");
    let names: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(names, ["Interlaken", "Queenstown"]);
}

#[then("the command succeeds and prints the no matches hint")]
fn command_prints_hint(#[from(world)] world: &RecommendWorld) {
    world.assert_succeeded();
    assert!(world.stdout_text().starts_with("No recommendations match"));
}

#[then("the command fails because the concept is missing")]
fn command_fails_missing_concept(#[from(world)] world: &RecommendWorld) {
    world.with_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CONCEPT),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the trip length is invalid")]
fn command_fails_invalid_days(#[from(world)] world: &RecommendWorld) {
    world.with_error(|error| match error {
        CliError::InvalidValue { field, value, .. } => {
            assert_eq!(*field, ARG_DAYS);
            assert_eq!(value, "9");
        }
        other => panic!("expected InvalidValue, found {other:?}"),
    });
}

#[then("the command fails because the catalog file is missing")]
fn command_fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    world.with_error(|error| match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_json, "recommending adventure trips as JSON");
register_recommend_scenario!(recommend_csv_export, "exporting the shortlist to CSV");
register_recommend_scenario!(recommend_empty_shortlist, "reporting an empty shortlist");
register_recommend_scenario!(recommend_missing_concept, "rejecting a missing concept");
register_recommend_scenario!(recommend_invalid_days, "rejecting an out of range trip length");
register_recommend_scenario!(recommend_missing_catalog, "rejecting a missing catalog file");
