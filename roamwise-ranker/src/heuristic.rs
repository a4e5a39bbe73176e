//! The default additive scoring heuristic.

use roamwise_core::{Destination, RecommendationQuery, Scorer};
use xxhash_rust::xxh64::xxh64;

use crate::{RankError, ScoreWeights};

const TIE_BREAK_SEED: u64 = 0;
const TIE_BREAK_BUCKETS: u64 = 100;
const TIE_BREAK_SCALE: f64 = 1000.0;

/// Deterministic per-destination jitter in `[0.0, 0.1)`.
///
/// Derived from the xxh64 hash of the name with a fixed seed, so the value
/// is identical across processes and platforms.
///
/// # Examples
/// ```
/// use roamwise_ranker::tie_breaker;
///
/// let jitter = tie_breaker("Kyoto");
/// assert!((0.0..0.1).contains(&jitter));
/// assert_eq!(jitter, tie_breaker("Kyoto"));
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    clippy::float_arithmetic,
    reason = "the hash is reduced to a bucket and scaled into the jitter range"
)]
pub fn tie_breaker(name: &str) -> f64 {
    let bucket = xxh64(name.as_bytes(), TIE_BREAK_SEED) % TIE_BREAK_BUCKETS;
    f64::from(u32::try_from(bucket).unwrap_or(0)) / TIE_BREAK_SCALE
}

/// Scores destinations by season, region preference and a stable tie-breaker.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use roamwise_core::{BudgetTier, Concept, Destination, Month, RecommendationQuery, Scorer};
/// use roamwise_ranker::HeuristicScorer;
///
/// # fn main() -> Result<(), roamwise_core::MonthError> {
/// let banff = Destination::new("Banff", "Canada", "North America", Coord { x: -115.57, y: 51.18 }, BudgetTier::High)
///     .with_concepts([Concept::Nature])
///     .with_best_months([Month::new(7)?]);
/// let query = RecommendationQuery::new(Concept::Nature, Month::new(7)?, 3);
/// let score = HeuristicScorer::default().score(&banff, &query);
/// assert!((1.6..1.7).contains(&score));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HeuristicScorer {
    weights: ScoreWeights,
}

impl HeuristicScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidWeight`] when a weight is unusable.
    pub fn new(weights: ScoreWeights) -> Result<Self, RankError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    fn seasonal(&self, destination: &Destination, query: &RecommendationQuery) -> f64 {
        if destination.is_in_season(query.month) {
            self.weights.seasonal_bonus
        } else {
            0.0
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "a non-preferred region subtracts the penalty"
    )]
    fn regional(&self, destination: &Destination, query: &RecommendationQuery) -> f64 {
        if !query.has_region_preference() {
            0.0
        } else if query.preferred_regions.contains(&destination.region) {
            self.weights.region_bonus
        } else {
            -self.weights.region_penalty
        }
    }
}

impl Scorer for HeuristicScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a sum of independent contributions"
    )]
    fn score(&self, destination: &Destination, query: &RecommendationQuery) -> f64 {
        self.weights.base
            + self.seasonal(destination, query)
            + self.regional(destination, query)
            + tie_breaker(&destination.name)
    }
}
