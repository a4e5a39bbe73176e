//! Facade crate for the Roamwise destination recommender.
//!
//! This crate re-exports the core domain types and exposes the ranking and
//! itinerary planning implementations behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "ranker", feature = "planner"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use roamwise::{Catalog, Concept, ItineraryRequest, ItinerarySynthesizer, Month, Pace};
//! use roamwise::{Planner, Ranker, RecommendationQuery};
//!
//! let catalog = Catalog::bundled()?;
//! let query = RecommendationQuery::new(Concept::Foodie, Month::new(4)?, 3);
//! let shortlist = Ranker::new().rank(catalog.destinations(), &query)?;
//! let request = ItineraryRequest::new(3, Pace::Normal);
//! for destination in shortlist {
//!     let itinerary = ItinerarySynthesizer::default().plan(destination, &request)?;
//!     assert_eq!(itinerary.len(), 3);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "ranker", feature = "planner")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use roamwise_core::{
    Afternoon, BudgetTier, Catalog, CatalogError, Concept, Destination, Evening, Food, Itinerary,
    ItineraryDay, ItineraryRequest, ItineraryRequestError, Month, MonthError, Pace, PlanError,
    Planner, QueryValidationError, RecommendationQuery, Scorer,
};

#[cfg(feature = "ranker")]
pub use roamwise_ranker::{
    HeuristicScorer, RankError, Ranker, ScoreWeights, ScoredCandidate, rank,
};

#[cfg(feature = "planner")]
pub use roamwise_planner::{ItinerarySynthesizer, PlannerConfig, PlannerConfigError, synthesize};
