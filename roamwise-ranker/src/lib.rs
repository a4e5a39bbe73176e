//! Destination ranking for Roamwise.
//!
//! The ranker narrows a catalog to destinations matching a
//! [`RecommendationQuery`](roamwise_core::RecommendationQuery) and orders
//! them by score:
//! - **Filtering** keeps destinations that carry the requested concept, sit
//!   in an allowed budget tier and, when requested, belong to the chosen
//!   country.
//! - **Scoring** is delegated to a [`Scorer`](roamwise_core::Scorer). The
//!   default [`HeuristicScorer`] adds a seasonal bonus, a regional bonus or
//!   penalty, and a stable hash-based tie-breaker to a base score.
//!
//! # Examples
//!
//! ```
//! use roamwise_core::{Catalog, Concept, Month, RecommendationQuery};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::bundled()?;
//! let query = RecommendationQuery::new(Concept::Foodie, Month::new(4)?, 3)
//!     .with_preferred_regions(["Europe"]);
//! for destination in roamwise_ranker::rank(catalog.destinations(), &query)? {
//!     assert!(destination.has_concept(Concept::Foodie));
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod heuristic;
mod ranker;
mod weights;

pub use error::RankError;
pub use heuristic::{HeuristicScorer, tie_breaker};
pub use ranker::{Ranker, ScoredCandidate, matches_filters, rank};
pub use weights::ScoreWeights;
