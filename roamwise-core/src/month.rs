//! Calendar months used for seasonal matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month in `1..=12`.
///
/// # Examples
/// ```
/// use roamwise_core::Month;
///
/// # fn main() -> Result<(), roamwise_core::MonthError> {
/// let july = Month::new(7)?;
/// assert_eq!(july.number(), 7);
/// assert!(Month::new(13).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

/// Errors returned by [`Month::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MonthError {
    /// The value was outside `1..=12`.
    #[error("month must be between 1 and 12, got {0}")]
    OutOfRange(u8),
}

impl Month {
    /// Validate and construct a month.
    ///
    /// # Errors
    /// Returns [`MonthError::OutOfRange`] unless `number` is in `1..=12`.
    pub const fn new(number: u8) -> Result<Self, MonthError> {
        if matches!(number, 1..=12) {
            Ok(Self(number))
        } else {
            Err(MonthError::OutOfRange(number))
        }
    }

    /// Return the month number in `1..=12`.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Month {
    type Error = MonthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid month '{s}'"))?;
        Self::new(number).map_err(|err| err.to_string())
    }
}
