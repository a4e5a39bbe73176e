//! Filter-and-rank over a destination catalog.

use log::{debug, trace};
use roamwise_core::{Destination, RecommendationQuery, Scorer};

use crate::{HeuristicScorer, RankError};

/// A destination that survived filtering, with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The ranked destination.
    pub destination: &'a Destination,
    /// Score assigned by the ranker's [`Scorer`].
    pub score: f64,
}

/// Report whether `destination` passes every hard filter of `query`.
///
/// A destination must carry the query concept, sit in an allowed budget
/// tier, and match the country when one is requested. Destinations failing
/// any filter are never scored.
#[must_use]
pub fn matches_filters(destination: &Destination, query: &RecommendationQuery) -> bool {
    destination.has_concept(query.concept)
        && query.budget_tiers.contains(&destination.budget)
        && query
            .country
            .as_deref()
            .is_none_or(|country| destination.country == country)
}

/// Ranks catalog destinations for a query.
///
/// Ranking filters the catalog, scores every survivor, sorts by score
/// descending and truncates to `query.count`. The sort is stable, so
/// destinations with identical scores keep their catalog order.
///
/// # Examples
/// ```
/// use roamwise_core::{Catalog, Concept, Month, RecommendationQuery};
/// use roamwise_ranker::Ranker;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::bundled()?;
/// let query = RecommendationQuery::new(Concept::Adventure, Month::new(7)?, 2)
///     .with_budget_tiers([roamwise_core::BudgetTier::High]);
/// let shortlist = Ranker::new().rank(catalog.destinations(), &query)?;
/// assert!(shortlist.len() <= 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = HeuristicScorer> {
    scorer: S,
}

impl Ranker {
    /// Create a ranker using the default [`HeuristicScorer`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_scorer(HeuristicScorer::default())
    }
}

impl<S: Scorer> Ranker<S> {
    /// Create a ranker using a custom scorer.
    #[must_use]
    pub const fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Return the scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `catalog` for `query`, returning destinations best first.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidQuery`] when the query fails validation.
    pub fn rank<'a>(
        &self,
        catalog: &'a [Destination],
        query: &RecommendationQuery,
    ) -> Result<Vec<&'a Destination>, RankError> {
        let ranked = self.rank_scored(catalog, query)?;
        Ok(ranked
            .into_iter()
            .map(|candidate| candidate.destination)
            .collect())
    }

    /// Rank `catalog` for `query`, keeping each destination's score.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidQuery`] when the query fails validation.
    pub fn rank_scored<'a>(
        &self,
        catalog: &'a [Destination],
        query: &RecommendationQuery,
    ) -> Result<Vec<ScoredCandidate<'a>>, RankError> {
        query.validate()?;
        let mut candidates: Vec<ScoredCandidate<'a>> = catalog
            .iter()
            .filter(|destination| matches_filters(destination, query))
            .map(|destination| {
                let score = self.scorer.score(destination, query);
                trace!("scored {} at {score:.3}", destination.name);
                ScoredCandidate { destination, score }
            })
            .collect();
        let survivors = candidates.len();
        candidates.sort_by(|left, right| right.score.total_cmp(&left.score));
        candidates.truncate(query.count);
        debug!(
            "ranked {} of {survivors} matching destinations ({} in catalog) for {} in month {}",
            candidates.len(),
            catalog.len(),
            query.concept,
            query.month
        );
        Ok(candidates)
    }
}

/// Rank `catalog` for `query` with the default heuristic.
///
/// # Errors
/// Returns [`RankError::InvalidQuery`] when the query fails validation.
pub fn rank<'a>(
    catalog: &'a [Destination],
    query: &RecommendationQuery,
) -> Result<Vec<&'a Destination>, RankError> {
    Ranker::new().rank(catalog, query)
}
