//! Error types raised while ranking destinations.

use roamwise_core::QueryValidationError;
use thiserror::Error;

/// Errors returned by [`Ranker`](crate::Ranker) and [`rank`](crate::rank).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The query failed boundary validation.
    #[error("invalid recommendation query: {0}")]
    InvalidQuery(#[from] QueryValidationError),
    /// A score weight was negative or not finite.
    #[error("score weight `{name}` must be finite and non-negative")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
    },
}
