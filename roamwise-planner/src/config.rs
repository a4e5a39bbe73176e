//! Fallback content used when a destination lacks activities or foods.

use std::borrow::Cow;

use roamwise_core::{Destination, Food};
use thiserror::Error;

const DEFAULT_ACTIVITIES: [&str; 3] = ["city walk", "photo spot", "local market"];
const DEFAULT_FOOD_NAME: &str = "local eatery";
const DEFAULT_FOOD_NOTE: &str = "explore a local favourite";

/// Errors returned by [`PlannerConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerConfigError {
    /// The fallback activity list was empty.
    #[error("at least one fallback activity is required")]
    NoFallbackActivities,
    /// The fallback food name was blank.
    #[error("fallback food name must not be blank")]
    BlankFallbackFood,
}

/// Configuration for [`ItinerarySynthesizer`](crate::ItinerarySynthesizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    fallback_activities: Vec<String>,
    fallback_food_name: String,
    fallback_food_note: String,
}

impl PlannerConfig {
    /// Build a configuration with custom fallbacks.
    ///
    /// # Errors
    /// Returns [`PlannerConfigError`] when no fallback activity is given or
    /// the fallback food name is blank.
    pub fn new<I, S>(
        fallback_activities: I,
        fallback_food_name: impl Into<String>,
        fallback_food_note: impl Into<String>,
    ) -> Result<Self, PlannerConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let activities: Vec<String> = fallback_activities.into_iter().map(Into::into).collect();
        if activities.is_empty() {
            return Err(PlannerConfigError::NoFallbackActivities);
        }
        let food_name = fallback_food_name.into();
        if food_name.trim().is_empty() {
            return Err(PlannerConfigError::BlankFallbackFood);
        }
        Ok(Self {
            fallback_activities: activities,
            fallback_food_name: food_name,
            fallback_food_note: fallback_food_note.into(),
        })
    }

    /// Activities used when a destination lists none.
    #[must_use]
    pub fn fallback_activities(&self) -> &[String] {
        &self.fallback_activities
    }

    /// Return the activity pool for `destination`.
    #[must_use]
    pub fn activities_for<'a>(&'a self, destination: &'a Destination) -> &'a [String] {
        if destination.activities.is_empty() {
            &self.fallback_activities
        } else {
            &destination.activities
        }
    }

    /// Return the food pool for `destination`.
    ///
    /// A destination without foods gets a single generic entry whose image
    /// query is the destination's lead gallery query, or its name when it
    /// has none.
    #[must_use]
    pub fn foods_for<'a>(&self, destination: &'a Destination) -> Cow<'a, [Food]> {
        if destination.foods.is_empty() {
            let image_query = destination
                .lead_gallery_query()
                .unwrap_or(destination.name.as_str());
            Cow::Owned(vec![Food::new(
                self.fallback_food_name.as_str(),
                self.fallback_food_note.as_str(),
                image_query,
            )])
        } else {
            Cow::Borrowed(&destination.foods)
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fallback_activities: Vec::from(DEFAULT_ACTIVITIES.map(str::to_owned)),
            fallback_food_name: DEFAULT_FOOD_NAME.to_owned(),
            fallback_food_note: DEFAULT_FOOD_NOTE.to_owned(),
        }
    }
}
