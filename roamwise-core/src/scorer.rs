//! Score destinations against a recommendation query.
//!
//! The `Scorer` trait assigns a ranking score to a
//! [`Destination`](crate::Destination) that already passed the query's
//! filters. Higher scores rank earlier.

use crate::{Destination, RecommendationQuery};

/// Calculate a ranking score for a destination.
///
/// Scorers only see destinations that matched the query's concept, budget
/// and country filters, so implementations need not repeat those checks.
/// Implementations must be thread-safe (`Send` + `Sync`) and must return
/// finite values; the ranker orders scores with [`f64::total_cmp`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use roamwise_core::{BudgetTier, Concept, Destination, Month, RecommendationQuery, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _destination: &Destination, _query: &RecommendationQuery) -> f64 {
///         1.0
///     }
/// }
///
/// # fn main() -> Result<(), roamwise_core::MonthError> {
/// let destination = Destination::new("Rome", "Italy", "Europe", Coord { x: 12.5, y: 41.9 }, BudgetTier::High);
/// let query = RecommendationQuery::new(Concept::Foodie, Month::new(5)?, 3);
/// assert_eq!(UnitScorer.score(&destination, &query), 1.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `destination` according to `query`.
    fn score(&self, destination: &Destination, query: &RecommendationQuery) -> f64;
}
