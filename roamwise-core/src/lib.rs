//! Core domain types for the Roamwise recommender.
//!
//! The crate holds the destination catalog model, the query and itinerary
//! shapes exchanged with callers, and the [`Scorer`] and [`Planner`] seams
//! implemented by the ranking and planning crates. Constructors and
//! `validate` methods return `Result` so invalid input surfaces at the
//! boundary instead of deep inside a ranking pass.

#![forbid(unsafe_code)]

mod budget;
mod catalog;
mod concept;
mod destination;
mod itinerary;
mod month;
mod planner;
mod query;
mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use budget::BudgetTier;
pub use catalog::{Catalog, CatalogError};
pub use concept::Concept;
pub use destination::{Destination, Food};
pub use itinerary::{
    Afternoon, Evening, Itinerary, ItineraryDay, ItineraryRequest, ItineraryRequestError, Pace,
};
pub use month::{Month, MonthError};
pub use planner::{PlanError, Planner};
pub use query::{QueryValidationError, RecommendationQuery};
pub use scorer::Scorer;
