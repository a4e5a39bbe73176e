//! Tunable weights for the heuristic scorer.

use crate::RankError;

/// Additive contributions making up a destination's score.
///
/// A destination that passed the query filters starts at `base`, gains
/// `seasonal_bonus` when the travel month is one of its best months, and,
/// when the traveller prefers some regions, gains `region_bonus` for a
/// preferred region or loses `region_penalty` otherwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Score every surviving destination starts with.
    pub base: f64,
    /// Added when the query month is a best month.
    pub seasonal_bonus: f64,
    /// Added when the destination's region is preferred.
    pub region_bonus: f64,
    /// Subtracted when regions are preferred but this one is not.
    pub region_penalty: f64,
}

impl ScoreWeights {
    /// Weights used by [`HeuristicScorer::default`](crate::HeuristicScorer).
    pub const DEFAULT: Self = Self {
        base: 1.0,
        seasonal_bonus: 0.6,
        region_bonus: 0.3,
        region_penalty: 0.2,
    };

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidWeight`] naming the first weight that is
    /// negative, infinite or NaN.
    pub fn validate(self) -> Result<Self, RankError> {
        let named = [
            ("base", self.base),
            ("seasonal_bonus", self.seasonal_bonus),
            ("region_bonus", self.region_bonus),
            ("region_penalty", self.region_penalty),
        ];
        named
            .into_iter()
            .find(|(_, weight)| !is_usable(*weight))
            .map_or(Ok(self), |(name, _)| Err(RankError::InvalidWeight { name }))
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn is_usable(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
