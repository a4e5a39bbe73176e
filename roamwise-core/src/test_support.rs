//! Sample destinations and scorers shared by unit and behaviour tests.
//!
//! Available to this crate's tests and to downstream crates enabling the
//! `test-support` feature.

use geo::Coord;

use crate::{BudgetTier, Concept, Destination, Food, Month, RecommendationQuery, Scorer};

/// Convert month numbers to [`Month`] values, skipping invalid ones.
#[must_use]
pub fn months(numbers: &[u8]) -> Vec<Month> {
    numbers
        .iter()
        .filter_map(|number| Month::new(*number).ok())
        .collect()
}

/// Interlaken: adventure, nature and romance in the Swiss summer.
#[must_use]
pub fn interlaken() -> Destination {
    Destination::new(
        "Interlaken",
        "Switzerland",
        "Europe",
        Coord {
            x: 7.8632,
            y: 46.6863,
        },
        BudgetTier::High,
    )
    .with_concepts([Concept::Adventure, Concept::Nature, Concept::Romantic])
    .with_best_months(months(&[6, 7, 8, 9]))
    .with_gallery_queries(["Interlaken paragliding", "Jungfraujoch"])
    .with_foods([
        Food::new("Fondue", "Melted Swiss cheese", "cheese fondue"),
        Food::new("Rösti", "Crisp potato cake", "rosti swiss"),
    ])
    .with_activities(["Paragliding", "Jungfrau railway", "Hiking"])
}

/// Queenstown: adventure in the southern summer.
#[must_use]
pub fn queenstown() -> Destination {
    Destination::new(
        "Queenstown",
        "New Zealand",
        "Oceania",
        Coord {
            x: 168.6626,
            y: -45.0312,
        },
        BudgetTier::High,
    )
    .with_concepts([Concept::Adventure, Concept::Nature])
    .with_best_months(months(&[12, 1, 2, 3]))
    .with_gallery_queries(["Queenstown bungee", "Milford Sound"])
    .with_foods([
        Food::new("Lamb", "New Zealand lamb", "new zealand lamb dish"),
        Food::new("Fish and chips", "Crisp battered fish", "fish and chips"),
    ])
    .with_activities(["Bungee or skydiving", "Milford Sound cruise", "Lake Wakatipu"])
}

/// Bangkok: a budget city-nightlife destination.
#[must_use]
pub fn bangkok() -> Destination {
    Destination::new(
        "Bangkok",
        "Thailand",
        "Southeast Asia",
        Coord {
            x: 100.5018,
            y: 13.7563,
        },
        BudgetTier::Low,
    )
    .with_concepts([Concept::CityNightlife, Concept::Foodie, Concept::Budget])
    .with_best_months(months(&[11, 12, 1, 2, 3]))
    .with_gallery_queries(["Bangkok skyline night", "Bangkok street food"])
    .with_foods([
        Food::new("Pad thai", "Stir-fried rice noodles", "pad thai"),
        Food::new("Tom yum goong", "Spicy prawn soup", "tom yum goong"),
        Food::new("Mango sticky rice", "Sweet coconut dessert", "mango sticky rice"),
    ])
    .with_activities([
        "Wat Arun and Wat Pho temples",
        "Chao Phraya boat ride",
        "Night market shopping",
    ])
}

/// Kyoto: culture, romance and food in spring and late autumn.
#[must_use]
pub fn kyoto() -> Destination {
    Destination::new(
        "Kyoto",
        "Japan",
        "East Asia",
        Coord {
            x: 135.7681,
            y: 35.0116,
        },
        BudgetTier::High,
    )
    .with_concepts([Concept::CultureHistory, Concept::Romantic, Concept::Foodie])
    .with_best_months(months(&[3, 4, 11, 12]))
    .with_gallery_queries(["Kyoto Fushimi Inari", "Arashiyama bamboo"])
    .with_foods([
        Food::new("Kaiseki", "Seasonal course meal", "kaiseki cuisine"),
        Food::new("Matcha dessert", "Bittersweet green tea treats", "matcha parfait"),
        Food::new("Yuba", "Tofu skin dishes", "yuba tofu skin"),
    ])
    .with_activities([
        "Arashiyama bamboo grove",
        "Fushimi Inari shrine",
        "Gion district",
    ])
}

/// A destination with no foods, activities or gallery queries.
#[must_use]
pub fn bare(name: &str) -> Destination {
    Destination::new(
        name,
        "Nowhere",
        "Nowhere",
        Coord { x: 0.0, y: 0.0 },
        BudgetTier::Medium,
    )
    .with_concepts([Concept::Nature])
}

/// The sample destinations in a fixed order.
#[must_use]
pub fn sample_catalog() -> Vec<Destination> {
    vec![queenstown(), bangkok(), interlaken(), kyoto()]
}

/// `Scorer` returning the same value for every destination.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _destination: &Destination, _query: &RecommendationQuery) -> f64 {
        self.0
    }
}
