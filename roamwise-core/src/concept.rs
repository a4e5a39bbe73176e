//! Concepts describing the style of a trip.
//!
//! The enum offers compile-time safety for the primary recommendation
//! filter. Each concept has a stable slug used in catalog files and on the
//! command line, plus a human-readable label.
//!
//! # Examples
//! ```
//! use roamwise_core::Concept;
//!
//! assert_eq!(Concept::Adventure.as_str(), "adventure");
//! assert_eq!(Concept::CityNightlife.to_string(), "city-nightlife");
//! assert_eq!(Concept::CultureHistory.label(), "Culture & History");
//! ```

use serde::{Deserialize, Serialize};

/// A travel style a destination is known for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Concept {
    /// Beaches, spas and slow days.
    Relaxation,
    /// Outdoor thrills and activities.
    Adventure,
    /// Heritage sites, temples and museums.
    CultureHistory,
    /// Landscapes, lakes and mountains.
    Nature,
    /// Skylines, bars and shopping after dark.
    CityNightlife,
    /// Trips that work with children.
    Family,
    /// Good value for money.
    Budget,
    /// High-end stays and experiences.
    Luxury,
    /// Trips for couples.
    Romantic,
    /// Food-led travel.
    Foodie,
}

impl Concept {
    /// Every concept in display order.
    pub const ALL: [Self; 10] = [
        Self::Relaxation,
        Self::Adventure,
        Self::CultureHistory,
        Self::Nature,
        Self::CityNightlife,
        Self::Family,
        Self::Budget,
        Self::Luxury,
        Self::Romantic,
        Self::Foodie,
    ];

    /// Return the concept slug.
    ///
    /// # Examples
    /// ```
    /// use roamwise_core::Concept;
    ///
    /// assert_eq!(Concept::CultureHistory.as_str(), "culture-history");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxation => "relaxation",
            Self::Adventure => "adventure",
            Self::CultureHistory => "culture-history",
            Self::Nature => "nature",
            Self::CityNightlife => "city-nightlife",
            Self::Family => "family",
            Self::Budget => "budget",
            Self::Luxury => "luxury",
            Self::Romantic => "romantic",
            Self::Foodie => "foodie",
        }
    }

    /// Return a label suitable for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relaxation => "Relaxation",
            Self::Adventure => "Adventure",
            Self::CultureHistory => "Culture & History",
            Self::Nature => "Nature",
            Self::CityNightlife => "City Nightlife",
            Self::Family => "Family",
            Self::Budget => "Budget",
            Self::Luxury => "Luxury",
            Self::Romantic => "Romantic",
            Self::Foodie => "Foodie",
        }
    }

    /// Report whether the concept describes city-type travel.
    ///
    /// Itineraries for destinations carrying a city concept end their days
    /// in bars rather than resting.
    ///
    /// # Examples
    /// ```
    /// use roamwise_core::Concept;
    ///
    /// assert!(Concept::CityNightlife.is_city_travel());
    /// assert!(!Concept::Nature.is_city_travel());
    /// ```
    #[must_use]
    pub const fn is_city_travel(self) -> bool {
        matches!(self, Self::CityNightlife)
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Concept {
    type Err = String;

    /// Parse a slug, a label, or a variant name. Case and punctuation are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "relaxation" => Ok(Self::Relaxation),
            "adventure" => Ok(Self::Adventure),
            "culturehistory" => Ok(Self::CultureHistory),
            "nature" => Ok(Self::Nature),
            "citynightlife" => Ok(Self::CityNightlife),
            "family" => Ok(Self::Family),
            "budget" => Ok(Self::Budget),
            "luxury" => Ok(Self::Luxury),
            "romantic" => Ok(Self::Romantic),
            "foodie" => Ok(Self::Foodie),
            _ => Err(format!("unknown concept '{s}'")),
        }
    }
}

impl TryFrom<String> for Concept {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Concept> for String {
    fn from(concept: Concept) -> Self {
        concept.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Concept::Foodie.to_string(), Concept::Foodie.as_str());
    }

    #[rstest]
    #[case("adventure", Concept::Adventure)]
    #[case("Adventure", Concept::Adventure)]
    #[case("culture-history", Concept::CultureHistory)]
    #[case("Culture & History", Concept::CultureHistory)]
    #[case("CultureHistory", Concept::CultureHistory)]
    #[case("city_nightlife", Concept::CityNightlife)]
    #[case("City Nightlife", Concept::CityNightlife)]
    fn parses_slugs_and_labels(#[case] raw: &str, #[case] expected: Concept) {
        assert_eq!(Concept::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Concept::from_str("skiing").expect_err("unknown concept");
        assert!(err.contains("unknown concept"));
    }

    #[rstest]
    fn every_slug_and_label_round_trips() {
        for concept in Concept::ALL {
            assert_eq!(Concept::from_str(concept.as_str()), Ok(concept));
            assert_eq!(Concept::from_str(concept.label()), Ok(concept));
        }
    }

    #[rstest]
    fn only_city_nightlife_is_city_travel() {
        let city: Vec<_> = Concept::ALL
            .into_iter()
            .filter(|c| c.is_city_travel())
            .collect();
        assert_eq!(city, vec![Concept::CityNightlife]);
    }
}
