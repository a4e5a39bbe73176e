//! Deterministic day-by-day itinerary synthesis.
//!
//! Days are filled by walking the destination's activity pool cyclically:
//! day `d` starts at position `d` and takes as many consecutive entries as
//! the pace allows for that day. The must-eat dish rotates the same way,
//! so a trip longer than the pool revisits earlier entries in order.

use std::num::NonZeroU16;

use log::debug;
use roamwise_core::{
    Afternoon, Destination, Evening, Food, Itinerary, ItineraryDay, ItineraryRequest,
    ItineraryRequestError, Pace, PlanError, Planner,
};

use crate::PlannerConfig;


/// Rule-based [`Planner`] producing draft itineraries.
///
/// The synthesizer is pure: the same destination, length and pace always
/// yield the same days.
///
/// # Examples
/// ```
/// use roamwise_core::{ItineraryRequest, Pace, Planner};
/// use roamwise_planner::ItinerarySynthesizer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = roamwise_core::Catalog::bundled()?;
/// let bangkok = catalog.get("Bangkok").ok_or("missing Bangkok")?;
/// let itinerary = ItinerarySynthesizer::default()
///     .plan(bangkok, &ItineraryRequest::new(3, Pace::Packed))?;
/// assert_eq!(itinerary.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItinerarySynthesizer {
    config: PlannerConfig,
}

impl ItinerarySynthesizer {
    /// Construct a synthesizer with explicit fallbacks.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Return the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build `days` itinerary days at `destination`.
    #[must_use]
    pub fn synthesize(
        &self,
        destination: &Destination,
        days: NonZeroU16,
        pace: Pace,
    ) -> Vec<ItineraryDay> {
        let activities = self.config.activities_for(destination);
        let foods = self.config.foods_for(destination);
        let evening = if destination.has_city_concept() {
            Evening::Nightlife
        } else {
            Evening::Rest
        };
        debug!(
            "planning {days} {pace} days at {} from {} activities and {} foods",
            destination.name,
            activities.len(),
            foods.len()
        );
        (1..=days.get())
            .map(|day| plan_day(day, pace, activities, &foods, evening))
            .collect()
    }
}

impl Planner for ItinerarySynthesizer {
    fn plan(
        &self,
        destination: &Destination,
        request: &ItineraryRequest,
    ) -> Result<Itinerary, PlanError> {
        let days = NonZeroU16::new(request.days).ok_or(ItineraryRequestError::ZeroDays)?;
        Ok(Itinerary::new(
            destination.name.as_str(),
            request.pace,
            self.synthesize(destination, days, request.pace),
        ))
    }
}

/// Build `days` itinerary days at `destination` with the default fallbacks.
///
/// # Examples
/// ```
/// use std::num::NonZeroU16;
///
/// use roamwise_core::{Afternoon, Pace};
/// use roamwise_planner::synthesize;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = roamwise_core::Catalog::bundled()?;
/// let kyoto = catalog.get("Kyoto").ok_or("missing Kyoto")?;
/// let days = synthesize(kyoto, NonZeroU16::MIN.saturating_add(1), Pace::Relaxed);
/// assert_eq!(days.len(), 2);
/// assert_eq!(days.last().map(|day| &day.afternoon), Some(&Afternoon::FreeTime));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn synthesize(destination: &Destination, days: NonZeroU16, pace: Pace) -> Vec<ItineraryDay> {
    ItinerarySynthesizer::default().synthesize(destination, days, pace)
}

fn plan_day(
    day: u16,
    pace: Pace,
    activities: &[String],
    foods: &[Food],
    evening: Evening,
) -> ItineraryDay {
    let start = usize::from(day);
    let mut picked = (0..pace.activity_slots(day))
        .filter_map(|offset| cyclic(activities, start.saturating_add(offset)).cloned());
    let morning = picked.next().unwrap_or_default();
    let afternoon = picked
        .next()
        .map_or(Afternoon::FreeTime, Afternoon::Activity);
    let additional = picked.collect();
    let must_eat = cyclic(foods, start)
        .map(|food| food.name.clone())
        .unwrap_or_default();
    ItineraryDay {
        day,
        morning,
        afternoon,
        additional,
        evening,
        must_eat,
    }
}

// Pool entry at `position` wrapped around the pool length.
fn cyclic<T>(pool: &[T], position: usize) -> Option<&T> {
    pool.get(position.checked_rem(pool.len())?)
}
