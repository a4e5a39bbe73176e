//! Recommend command implementation for the Roamwise CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Datelike;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamwise_core::{
    BudgetTier, Catalog, Concept, Destination, Itinerary, ItineraryRequest, Month, Pace, Planner,
    RecommendationQuery,
};
use roamwise_planner::ItinerarySynthesizer;
use roamwise_ranker::Ranker;
use serde::{Deserialize, Serialize};

use crate::render::OutputFormat;
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_CONCEPT, ARG_COUNT, ARG_COUNTRY, ARG_DAYS, ARG_EXPORT_CSV,
    ARG_FORMAT, ARG_MONTH, ARG_PACE, ARG_REGION, CliError, ENV_CONCEPT, export, render,
    require_existing,
};

const DEFAULT_COUNT: usize = 5;
const DEFAULT_DAYS: u16 = 3;
const MIN_DAYS: u16 = 2;
const MAX_DAYS: u16 = 7;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Shortlist destinations for a travel concept and month, then \
                 draft a day-by-day itinerary for each. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Recommend destinations with draft itineraries"
)]
#[ortho_config(prefix = "ROAMWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a catalog JSON file. Defaults to the bundled catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Travel concept every recommendation must carry (e.g. "adventure").
    #[arg(long = ARG_CONCEPT, value_name = "concept")]
    #[serde(default)]
    pub(crate) concept: Option<String>,
    /// Month of travel (1-12). Defaults to the current month.
    #[arg(long = ARG_MONTH, value_name = "1-12")]
    #[serde(default)]
    pub(crate) month: Option<u8>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Accepted budget tiers. Defaults to every tier.
    #[arg(long = ARG_BUDGET, value_name = "tier", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) budget: Vec<String>,
    /// Preferred regions; repeat the flag or separate with commas.
    #[arg(long = ARG_REGION, value_name = "region", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) region: Vec<String>,
    /// Restrict recommendations to one country.
    #[arg(long = ARG_COUNTRY, value_name = "name")]
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Trip length in days (2-7).
    #[arg(long = ARG_DAYS, value_name = "n")]
    #[serde(default)]
    pub(crate) days: Option<u16>,
    /// Itinerary pace: relaxed, normal or packed.
    #[arg(long = ARG_PACE, value_name = "pace")]
    #[serde(default)]
    pub(crate) pace: Option<String>,
    /// Output format: text or json.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Also write the shortlist to this CSV file.
    #[arg(long = ARG_EXPORT_CSV, value_name = "path")]
    #[serde(default)]
    pub(crate) export_csv: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Catalog file to load, or `None` for the bundled catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Validated ranking query.
    pub(crate) query: RecommendationQuery,
    /// Trip length and pace for each itinerary.
    pub(crate) request: ItineraryRequest,
    /// How results are written to stdout.
    pub(crate) format: OutputFormat,
    /// Optional CSV export destination.
    pub(crate) export_csv: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    /// Resolve `args`, using `today` when no month was given.
    pub(crate) fn resolve(args: RecommendArgs, today: Month) -> Result<Self, CliError> {
        let concept_text = args.concept.ok_or(CliError::MissingArgument {
            field: ARG_CONCEPT,
            env: ENV_CONCEPT,
        })?;
        let concept: Concept = parse_value(ARG_CONCEPT, &concept_text)?;
        let month = args.month.map_or(Ok(today), |number| {
            Month::new(number)
                .map_err(|err| invalid(ARG_MONTH, number.to_string(), err.to_string()))
        })?;
        let count = args.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 {
            return Err(invalid(ARG_COUNT, "0", "must be at least 1"));
        }
        let tiers = parse_tiers(&args.budget)?;
        let regions: BTreeSet<String> = args
            .region
            .iter()
            .map(|region| region.trim())
            .filter(|region| !region.is_empty())
            .map(str::to_owned)
            .collect();

        let mut query = RecommendationQuery::new(concept, month, count)
            .with_budget_tiers(tiers)
            .with_preferred_regions(regions);
        if let Some(country) = args.country.filter(|name| !name.trim().is_empty()) {
            query = query.with_country(country.trim());
        }

        let days = args.days.unwrap_or(DEFAULT_DAYS);
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(invalid(
                ARG_DAYS,
                days.to_string(),
                format!("must be between {MIN_DAYS} and {MAX_DAYS}"),
            ));
        }
        let pace = args
            .pace
            .as_deref()
            .map_or(Ok(Pace::default()), |text| parse_value(ARG_PACE, text))?;
        let format = args
            .format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), |text| {
                parse_value(ARG_FORMAT, text)
            })?;

        Ok(Self {
            catalog: args.catalog,
            query,
            request: ItineraryRequest::new(days, pace),
            format,
            export_csv: args.export_csv,
        })
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        Self::resolve(args, current_month()?)
    }
}

/// A shortlisted destination with its draft itinerary.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Recommendation<'a> {
    /// The recommended destination.
    pub(crate) destination: &'a Destination,
    /// Ranking score.
    pub(crate) score: f64,
    /// Draft itinerary for the requested trip.
    pub(crate) itinerary: Itinerary,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(path) = &config.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(config.catalog.as_deref())?;
    let recommendations = recommend(&catalog, config)?;
    if let Some(path) = &config.export_csv {
        export::write_csv(path, &recommendations)?;
    }
    render::write_recommendations(writer, config.format, &recommendations)
}

/// Rank `catalog` and plan an itinerary for every shortlisted destination.
pub(crate) fn recommend<'a>(
    catalog: &'a Catalog,
    config: &RecommendConfig,
) -> Result<Vec<Recommendation<'a>>, CliError> {
    let shortlist = Ranker::new().rank_scored(catalog.destinations(), &config.query)?;
    debug!("shortlisted {} destinations", shortlist.len());
    let planner = ItinerarySynthesizer::default();
    shortlist
        .into_iter()
        .map(|candidate| {
            let itinerary = planner.plan(candidate.destination, &config.request)?;
            Ok(Recommendation {
                destination: candidate.destination,
                score: candidate.score,
                itinerary,
            })
        })
        .collect()
}

/// Load the catalog at `path`, or the bundled catalog when `path` is `None`.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let catalog = path.map_or_else(Catalog::bundled, Catalog::from_path)?;
    Ok(catalog)
}

fn current_month() -> Result<Month, CliError> {
    let number = chrono::Local::now().month();
    u8::try_from(number)
        .ok()
        .and_then(|month| Month::new(month).ok())
        .ok_or_else(|| {
            invalid(
                ARG_MONTH,
                number.to_string(),
                "system clock reported an invalid month",
            )
        })
}

fn parse_tiers(values: &[String]) -> Result<BTreeSet<BudgetTier>, CliError> {
    let tiers = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| parse_value(ARG_BUDGET, value))
        .collect::<Result<BTreeSet<BudgetTier>, CliError>>()?;
    if tiers.is_empty() {
        Ok(BudgetTier::ALL.into_iter().collect())
    } else {
        Ok(tiers)
    }
}

fn parse_value<T>(field: &'static str, text: &str) -> Result<T, CliError>
where
    T: std::str::FromStr<Err = String>,
{
    text.parse().map_err(|reason| invalid(field, text, reason))
}

fn invalid(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> CliError {
    CliError::InvalidValue {
        field,
        value: value.into(),
        reason: reason.into(),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
    today: Month,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::resolve(merged, today)
}
