//! Day-by-day itineraries.
//!
//! An itinerary fills each day with a morning activity, an afternoon that is
//! either another activity or free time, an evening plan, and one dish the
//! traveller should not miss. Packed days may carry extra activities beyond
//! the afternoon.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How densely days are filled with activities.
///
/// # Examples
/// ```
/// use roamwise_core::Pace;
///
/// assert_eq!(Pace::Relaxed.activity_slots(1), 2);
/// assert_eq!(Pace::Relaxed.activity_slots(2), 1);
/// assert_eq!(Pace::Packed.activity_slots(2), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Alternate full days with half days.
    Relaxed,
    /// Two activities every day.
    #[default]
    Normal,
    /// Alternate full days with extra-full days.
    Packed,
}

impl Pace {
    /// Every pace from slowest to fastest.
    pub const ALL: [Self; 3] = [Self::Relaxed, Self::Normal, Self::Packed];

    /// Return the pace name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Normal => "normal",
            Self::Packed => "packed",
        }
    }

    /// Number of activity slots on the 1-based `day`.
    ///
    /// Relaxed trips drop to one activity on even days; packed trips rise
    /// to three. Odd days always have two.
    #[must_use]
    pub const fn activity_slots(self, day: u16) -> usize {
        let even = day.is_multiple_of(2);
        match self {
            Self::Relaxed if even => 1,
            Self::Packed if even => 3,
            Self::Relaxed | Self::Normal | Self::Packed => 2,
        }
    }
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "normal" => Ok(Self::Normal),
            "packed" => Ok(Self::Packed),
            _ => Err(format!(
                "unknown pace '{s}' (expected relaxed, normal or packed)"
            )),
        }
    }
}

/// The afternoon slot of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Afternoon {
    /// A scheduled activity.
    Activity(String),
    /// Nothing planned.
    FreeTime,
}

impl Afternoon {
    /// Report whether the afternoon is unplanned.
    #[must_use]
    pub const fn is_free_time(&self) -> bool {
        matches!(self, Self::FreeTime)
    }

    /// Return the activity name, if one is scheduled.
    #[must_use]
    pub const fn activity(&self) -> Option<&str> {
        match self {
            Self::Activity(name) => Some(name.as_str()),
            Self::FreeTime => None,
        }
    }
}

impl std::fmt::Display for Afternoon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Activity(name) => f.write_str(name),
            Self::FreeTime => f.write_str("free time"),
        }
    }
}

/// The evening plan of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evening {
    /// Bars and night views.
    Nightlife,
    /// An early night.
    Rest,
}

impl Evening {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nightlife => "nightlife/bar",
            Self::Rest => "rest",
        }
    }
}

impl std::fmt::Display for Evening {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single planned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u16,
    /// First activity of the day.
    pub morning: String,
    /// Second activity, or free time on light days.
    pub afternoon: Afternoon,
    /// Activities beyond the afternoon slot.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<String>,
    /// Evening plan.
    pub evening: Evening,
    /// The dish to eat today.
    pub must_eat: String,
}

impl ItineraryDay {
    /// Number of activities scheduled on the day.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        let afternoon = usize::from(!self.afternoon.is_free_time());
        1 + afternoon + self.additional.len()
    }

    /// Iterate over scheduled activities in order.
    pub fn activities(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.morning.as_str())
            .chain(self.afternoon.activity())
            .chain(self.additional.iter().map(String::as_str))
    }
}

/// A draft plan for one destination.
///
/// # Examples
/// ```
/// use roamwise_core::{Itinerary, Pace};
///
/// let itinerary = Itinerary::new("Kyoto", Pace::Normal, Vec::new());
/// assert!(itinerary.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Name of the planned destination.
    pub destination: String,
    /// Pace the plan was built with.
    pub pace: Pace,
    /// Planned days in order.
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Construct an itinerary from planned days.
    #[must_use]
    pub fn new(destination: impl Into<String>, pace: Pace, days: Vec<ItineraryDay>) -> Self {
        Self {
            destination: destination.into(),
            pace,
            days,
        }
    }

    /// Number of planned days.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.days.len()
    }

    /// Report whether no days are planned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Parameters for planning a trip to one destination.
///
/// # Examples
/// ```
/// use roamwise_core::{ItineraryRequest, Pace};
///
/// let request = ItineraryRequest::new(3, Pace::Packed);
/// assert!(request.validate().is_ok());
/// assert!(ItineraryRequest::new(0, Pace::Packed).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    /// Trip length in days.
    pub days: u16,
    /// Activity density.
    #[serde(default)]
    pub pace: Pace,
}

/// Validation failures for [`ItineraryRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItineraryRequestError {
    /// The trip had no days.
    #[error("trip length must be at least one day")]
    ZeroDays,
}

impl ItineraryRequest {
    /// Construct a request.
    #[must_use]
    pub const fn new(days: u16, pace: Pace) -> Self {
        Self { days, pace }
    }

    /// Check the request is usable.
    ///
    /// # Errors
    /// Returns [`ItineraryRequestError::ZeroDays`] for an empty trip.
    pub const fn validate(&self) -> Result<(), ItineraryRequestError> {
        if self.days == 0 {
            Err(ItineraryRequestError::ZeroDays)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Pace::Relaxed, 1, 2)]
    #[case(Pace::Relaxed, 2, 1)]
    #[case(Pace::Normal, 1, 2)]
    #[case(Pace::Normal, 2, 2)]
    #[case(Pace::Packed, 1, 2)]
    #[case(Pace::Packed, 2, 3)]
    #[case(Pace::Packed, 7, 2)]
    fn slots_follow_day_parity(#[case] pace: Pace, #[case] day: u16, #[case] expected: usize) {
        assert_eq!(pace.activity_slots(day), expected);
    }

    #[rstest]
    fn pace_parses_names() {
        for pace in Pace::ALL {
            assert_eq!(pace.as_str().parse::<Pace>(), Ok(pace));
        }
        assert!("hectic".parse::<Pace>().is_err());
    }

    #[rstest]
    fn free_afternoon_counts_one_activity() {
        let day = ItineraryDay {
            day: 2,
            morning: "Temple visit".into(),
            afternoon: Afternoon::FreeTime,
            additional: Vec::new(),
            evening: Evening::Rest,
            must_eat: "Ramen".into(),
        };
        assert_eq!(day.activity_count(), 1);
        assert_eq!(day.activities().collect::<Vec<_>>(), vec!["Temple visit"]);
        assert_eq!(day.afternoon.to_string(), "free time");
    }

    #[rstest]
    fn packed_day_lists_all_activities() {
        let day = ItineraryDay {
            day: 2,
            morning: "A".into(),
            afternoon: Afternoon::Activity("B".into()),
            additional: vec!["C".into()],
            evening: Evening::Nightlife,
            must_eat: "Tacos".into(),
        };
        assert_eq!(day.activity_count(), 3);
        assert_eq!(day.activities().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(day.evening.to_string(), "nightlife/bar");
    }
}
