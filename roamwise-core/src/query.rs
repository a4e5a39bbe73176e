//! Recommendation queries.
//!
//! A query captures what the traveller asked for: the primary concept, the
//! month they intend to travel, how many suggestions they want, and the
//! secondary filters narrowing the catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BudgetTier, Concept, Month};

/// Parameters for a recommendation request.
///
/// # Examples
/// ```rust
/// use roamwise_core::{BudgetTier, Concept, Month, RecommendationQuery};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let query = RecommendationQuery::new(Concept::Adventure, Month::new(7)?, 2)
///     .with_budget_tiers([BudgetTier::High])
///     .with_country("Switzerland");
/// query.validate()?;
/// assert_eq!(query.count, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    /// Travel style every candidate must carry.
    pub concept: Concept,
    /// Month of travel, used for the seasonal bonus.
    pub month: Month,
    /// Maximum number of recommendations to return.
    pub count: usize,
    /// Budget tiers the traveller accepts. Must not be empty.
    pub budget_tiers: BTreeSet<BudgetTier>,
    /// Preferred regions. An empty set expresses no preference.
    #[serde(default)]
    pub preferred_regions: BTreeSet<String>,
    /// Restrict candidates to a single country.
    #[serde(default)]
    pub country: Option<String>,
}

/// Validation failures for [`RecommendationQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryValidationError {
    /// The requested result count was zero.
    #[error("recommendation count must be at least 1")]
    ZeroCount,
    /// No budget tier was allowed.
    #[error("at least one budget tier must be allowed")]
    NoBudgetTiers,
}

impl RecommendationQuery {
    /// Construct a query accepting every budget tier, any region and any
    /// country.
    #[must_use]
    pub fn new(concept: Concept, month: Month, count: usize) -> Self {
        Self {
            concept,
            month,
            count,
            budget_tiers: BudgetTier::ALL.into_iter().collect(),
            preferred_regions: BTreeSet::new(),
            country: None,
        }
    }

    /// Replace the allowed budget tiers.
    #[must_use]
    pub fn with_budget_tiers(mut self, tiers: impl IntoIterator<Item = BudgetTier>) -> Self {
        self.budget_tiers = tiers.into_iter().collect();
        self
    }

    /// Replace the preferred regions.
    #[must_use]
    pub fn with_preferred_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to destinations in `country`.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Report whether the traveller expressed a regional preference.
    #[must_use]
    pub fn has_region_preference(&self) -> bool {
        !self.preferred_regions.is_empty()
    }

    /// Check the query is usable.
    ///
    /// # Errors
    /// Returns [`QueryValidationError`] when the count is zero or no budget
    /// tier is allowed.
    pub fn validate(&self) -> Result<(), QueryValidationError> {
        if self.count == 0 {
            return Err(QueryValidationError::ZeroCount);
        }
        if self.budget_tiers.is_empty() {
            return Err(QueryValidationError::NoBudgetTiers);
        }
        Ok(())
    }
}
