//! Budget tiers classifying the cost of a destination.

use serde::{Deserialize, Serialize};

/// Ordinal cost classification of a destination.
///
/// Tiers parse from their names (`low`, `medium`, `high`) or from the dollar
/// shorthand used by travel guides (`$`, `$$`, `$$$`).
///
/// # Examples
/// ```
/// use roamwise_core::BudgetTier;
///
/// assert_eq!("$$".parse::<BudgetTier>(), Ok(BudgetTier::Medium));
/// assert_eq!(BudgetTier::High.symbol(), "$$$");
/// assert!(BudgetTier::Low < BudgetTier::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BudgetTier {
    /// Cheap to visit.
    Low,
    /// Mid-range.
    Medium,
    /// Expensive.
    High,
}

impl BudgetTier {
    /// Every tier from cheapest to most expensive.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Return the tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Return the dollar shorthand for the tier.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Low => "$",
            Self::Medium => "$$",
            Self::High => "$$$",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "$" => Ok(Self::Low),
            "medium" | "$$" => Ok(Self::Medium),
            "high" | "$$$" => Ok(Self::High),
            _ => Err(format!("unknown budget tier '{s}'")),
        }
    }
}

impl TryFrom<String> for BudgetTier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BudgetTier> for String {
    fn from(tier: BudgetTier) -> Self {
        tier.as_str().to_owned()
    }
}
