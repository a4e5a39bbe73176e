//! Text and JSON rendering of recommendations.

use std::io::Write;

use roamwise_core::{Destination, Itinerary, ItineraryDay};

use crate::CliError;
use crate::recommend::Recommendation;

const NO_MATCHES_HINT: &str =
    "No recommendations match these filters. Try another month or widen the budget and region filters.";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown format '{s}' (expected text or json)")),
        }
    }
}

pub(crate) fn write_recommendations(
    writer: &mut dyn Write,
    format: OutputFormat,
    recommendations: &[Recommendation<'_>],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, recommendations).map_err(CliError::WriteOutput),
        OutputFormat::Json => write_json(writer, recommendations),
    }
}

fn write_json(
    writer: &mut dyn Write,
    recommendations: &[Recommendation<'_>],
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(recommendations).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_text(
    writer: &mut dyn Write,
    recommendations: &[Recommendation<'_>],
) -> std::io::Result<()> {
    if recommendations.is_empty() {
        return writeln!(writer, "{NO_MATCHES_HINT}");
    }
    for (rank, recommendation) in (1_usize..).zip(recommendations) {
        if rank > 1 {
            writeln!(writer)?;
        }
        write_destination(writer, rank, recommendation.destination, recommendation.score)?;
        write_itinerary(writer, &recommendation.itinerary)?;
    }
    Ok(())
}

fn write_destination(
    writer: &mut dyn Write,
    rank: usize,
    destination: &Destination,
    score: f64,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{rank}. {} ({}, {}) {} score {score:.2}",
        destination.name,
        destination.country,
        destination.region,
        destination.budget.symbol(),
    )?;
    let concepts: Vec<&str> = destination
        .concepts
        .iter()
        .map(|concept| concept.label())
        .collect();
    writeln!(writer, "   {}", concepts.join(", "))?;
    writeln!(writer, "   Best months: {}", best_months(destination))?;
    if !destination.blurb.is_empty() {
        writeln!(writer, "   {}", destination.blurb)?;
    }
    if !destination.activities.is_empty() {
        writeln!(writer, "   Activities: {}", destination.activities.join(", "))?;
    }
    if !destination.foods.is_empty() {
        writeln!(writer, "   Foods: {}", food_list(destination))?;
    }
    Ok(())
}

/// Dishes with their notes, separated by semicolons.
pub(crate) fn food_list(destination: &Destination) -> String {
    destination
        .foods
        .iter()
        .map(|food| {
            if food.note.is_empty() {
                food.name.clone()
            } else {
                format!("{} ({})", food.name, food.note)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> std::io::Result<()> {
    writeln!(
        writer,
        "   Draft itinerary ({} days, {}):",
        itinerary.len(),
        itinerary.pace
    )?;
    for day in &itinerary.days {
        writeln!(writer, "     {}", day_line(day))?;
    }
    Ok(())
}

/// Render one itinerary day on a single line.
pub(crate) fn day_line(day: &ItineraryDay) -> String {
    let mut afternoon = day
        .afternoon
        .activity()
        .unwrap_or("free time")
        .to_owned();
    for extra in &day.additional {
        afternoon.push_str(" + ");
        afternoon.push_str(extra);
    }
    format!(
        "Day {}: morning {}; afternoon {}; evening {}; must eat {}",
        day.day,
        day.morning,
        afternoon,
        day.evening.label(),
        day.must_eat
    )
}

/// Best months as an ascending, comma separated list.
pub(crate) fn best_months(destination: &Destination) -> String {
    destination
        .best_months
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
