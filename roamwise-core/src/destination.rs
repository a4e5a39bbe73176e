//! Destinations and the foods they are known for.
//!
//! Destinations are reference data: they are loaded once from the catalog
//! and never mutated afterwards. The chaining constructors exist for tests
//! and for callers that assemble a catalog in code.

use std::collections::BTreeSet;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{BudgetTier, Concept, Month};

/// A dish worth trying at a destination.
///
/// # Examples
/// ```
/// use roamwise_core::Food;
///
/// let food = Food::new("Pad thai", "Stir-fried rice noodles", "pad thai");
/// assert_eq!(food.name, "Pad thai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Dish name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub note: String,
    /// Keyword used by image search front ends.
    #[serde(default)]
    pub image_query: String,
}

impl Food {
    /// Construct a food entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        note: impl Into<String>,
        image_query: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            image_query: image_query.into(),
        }
    }
}

/// A place that can be recommended.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. They are
/// informational only and play no part in ranking.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamwise_core::{BudgetTier, Concept, Destination, Month};
///
/// # fn main() -> Result<(), roamwise_core::MonthError> {
/// let interlaken = Destination::new(
///     "Interlaken",
///     "Switzerland",
///     "Europe",
///     Coord { x: 7.8632, y: 46.6863 },
///     BudgetTier::High,
/// )
/// .with_concepts([Concept::Adventure, Concept::Nature])
/// .with_best_months([Month::new(7)?, Month::new(8)?]);
///
/// assert!(interlaken.has_concept(Concept::Adventure));
/// assert!(interlaken.is_in_season(Month::new(7)?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Country the destination belongs to.
    pub country: String,
    /// Free-text regional classification, e.g. `"East Asia"`.
    pub region: String,
    /// Geographic position, serialised as `{"lat": .., "lon": ..}`.
    #[serde(with = "lat_lon")]
    pub location: Coord<f64>,
    /// Travel styles the destination suits, in display order.
    #[serde(default)]
    pub concepts: Vec<Concept>,
    /// Months with favourable travel conditions.
    #[serde(default)]
    pub best_months: BTreeSet<Month>,
    /// Cost classification.
    pub budget: BudgetTier,
    /// Short description.
    #[serde(default)]
    pub blurb: String,
    /// Image search keywords in display order.
    #[serde(default)]
    pub gallery_queries: Vec<String>,
    /// Signature dishes in display order.
    #[serde(default)]
    pub foods: Vec<Food>,
    /// Recommended activities in display order.
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Destination {
    /// Construct a destination without concepts, seasons, foods or
    /// activities.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
        location: Coord<f64>,
        budget: BudgetTier,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            region: region.into(),
            location,
            concepts: Vec::new(),
            best_months: BTreeSet::new(),
            budget,
            blurb: String::new(),
            gallery_queries: Vec::new(),
            foods: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// Replace the concept tags.
    #[must_use]
    pub fn with_concepts(mut self, concepts: impl IntoIterator<Item = Concept>) -> Self {
        self.concepts = concepts.into_iter().collect();
        self
    }

    /// Replace the favourable months.
    #[must_use]
    pub fn with_best_months(mut self, months: impl IntoIterator<Item = Month>) -> Self {
        self.best_months = months.into_iter().collect();
        self
    }

    /// Replace the description.
    #[must_use]
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }

    /// Replace the image search keywords.
    #[must_use]
    pub fn with_gallery_queries<I, S>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gallery_queries = queries.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the signature dishes.
    #[must_use]
    pub fn with_foods(mut self, foods: impl IntoIterator<Item = Food>) -> Self {
        self.foods = foods.into_iter().collect();
        self
    }

    /// Replace the recommended activities.
    #[must_use]
    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Report whether the destination is tagged with `concept`.
    #[must_use]
    pub fn has_concept(&self, concept: Concept) -> bool {
        self.concepts.contains(&concept)
    }

    /// Report whether `month` is one of the favourable months.
    #[must_use]
    pub fn is_in_season(&self, month: Month) -> bool {
        self.best_months.contains(&month)
    }

    /// Report whether any concept describes city-type travel.
    #[must_use]
    pub fn has_city_concept(&self) -> bool {
        self.concepts.iter().any(|concept| concept.is_city_travel())
    }

    /// Return the first image search keyword, if any.
    #[must_use]
    pub fn lead_gallery_query(&self) -> Option<&str> {
        self.gallery_queries.first().map(String::as_str)
    }
}

mod lat_lon {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LatLon {
        lat: f64,
        lon: f64,
    }

    pub(super) fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        LatLon {
            lat: coord.y,
            lon: coord.x,
        }
        .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let LatLon { lat, lon } = LatLon::deserialize(deserializer)?;
        Ok(Coord { x: lon, y: lat })
    }
}
