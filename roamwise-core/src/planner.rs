//! Plan itineraries for a single destination.

use thiserror::Error;

use crate::{Destination, Itinerary, ItineraryRequest, ItineraryRequestError};

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. zero days.
    #[error("invalid itinerary request: {0}")]
    InvalidRequest(#[from] ItineraryRequestError),
}

/// Build a day-by-day itinerary for a destination.
///
/// Implementations should return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking. Planners must be `Send + Sync` so one
/// instance can plan several destinations across threads.
pub trait Planner: Send + Sync {
    /// Plan `request.days` days at `destination`.
    fn plan(
        &self,
        destination: &Destination,
        request: &ItineraryRequest,
    ) -> Result<Itinerary, PlanError>;
}
