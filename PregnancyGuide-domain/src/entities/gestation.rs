use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First week shown by the tracker
pub const FIRST_VALID_WEEK: i64 = 1;

/// Last week shown by the tracker
pub const LAST_VALID_WEEK: i64 = 41;

/// Calculation mode label was not one of the two recognized values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid calculation type '{0}'. Expected \"Conception Date\" or \"Last Menstrual Period Date\"")]
pub struct InvalidModeError(pub String);

/// Which reference date the user supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Date of conception
    #[serde(rename = "Conception Date")]
    Conception,

    /// First day of the last menstrual period
    #[serde(rename = "Last Menstrual Period Date")]
    LastMenstrualPeriod,
}

impl CalculationMode {
    /// Every mode, in form order
    pub const ALL: [CalculationMode; 2] = [CalculationMode::Conception, CalculationMode::LastMenstrualPeriod];

    /// Label used by the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Conception => "Conception Date",
            CalculationMode::LastMenstrualPeriod => "Last Menstrual Period Date",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculationMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculationMode::ALL
            .into_iter()
            .find(|mode| mode.label() == s.trim())
            .ok_or_else(|| InvalidModeError(s.to_string()))
    }
}

/// Reference date and how to interpret it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationInput {
    /// Date supplied by the user
    pub reference_date: NaiveDate,

    /// How the date should be interpreted
    pub mode: CalculationMode,
}

impl GestationInput {
    /// Create a new input
    pub fn new(reference_date: NaiveDate, mode: CalculationMode) -> Self {
        Self { reference_date, mode }
    }
}

/// Expected due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateEstimate {
    /// Estimated date of delivery
    pub due_date: NaiveDate,
}

/// Gestational week, split into values the tracker can display and values it cannot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekOfPregnancy {
    /// Week within 1..=41
    InRange(u32),

    /// Any other computed week
    OutOfRange(i64),
}

impl WeekOfPregnancy {
    /// Classify a computed week number
    pub fn from_week(week: i64) -> Self {
        if (FIRST_VALID_WEEK..=LAST_VALID_WEEK).contains(&week) {
            WeekOfPregnancy::InRange(week as u32)
        } else {
            WeekOfPregnancy::OutOfRange(week)
        }
    }

    /// The raw week number
    pub fn number(&self) -> i64 {
        match self {
            WeekOfPregnancy::InRange(week) => i64::from(*week),
            WeekOfPregnancy::OutOfRange(week) => *week,
        }
    }

    /// Whether the week can be displayed
    pub fn is_in_range(&self) -> bool {
        matches!(self, WeekOfPregnancy::InRange(_))
    }
}

/// One of the three segments of a 40-week pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trimester {
    /// Weeks 1 to 13
    #[serde(rename = "First Trimester")]
    First,

    /// Weeks 14 to 27
    #[serde(rename = "Second Trimester")]
    Second,

    /// Weeks 28 onwards
    #[serde(rename = "Third Trimester")]
    Third,
}

impl Trimester {
    /// Every trimester, in order
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    /// Label used by the static tables and the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        }
    }

    /// Parse an exact trimester label
    pub fn from_label(label: &str) -> Option<Self> {
        Trimester::ALL.into_iter().find(|trimester| trimester.label() == label.trim())
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels_round_trip() {
        for mode in CalculationMode::ALL {
            assert_eq!(mode.label().parse::<CalculationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_invalid() {
        let err = "Ovulation Date".parse::<CalculationMode>().unwrap_err();
        assert_eq!(err, InvalidModeError("Ovulation Date".to_string()));
        assert!(err.to_string().contains("Ovulation Date"));
    }

    #[test]
    fn test_mode_labels_are_case_sensitive() {
        assert!("conception date".parse::<CalculationMode>().is_err());
    }

    #[test]
    fn test_week_classification() {
        assert_eq!(WeekOfPregnancy::from_week(1), WeekOfPregnancy::InRange(1));
        assert_eq!(WeekOfPregnancy::from_week(41), WeekOfPregnancy::InRange(41));
        assert_eq!(WeekOfPregnancy::from_week(0), WeekOfPregnancy::OutOfRange(0));
        assert_eq!(WeekOfPregnancy::from_week(42), WeekOfPregnancy::OutOfRange(42));
        assert_eq!(WeekOfPregnancy::from_week(-3).number(), -3);
        assert!(!WeekOfPregnancy::from_week(-3).is_in_range());
    }

    #[test]
    fn test_trimester_labels() {
        assert_eq!(Trimester::from_label("Second Trimester"), Some(Trimester::Second));
        assert_eq!(Trimester::from_label("Fourth Trimester"), None);
        assert_eq!(serde_json::to_value(Trimester::Third).unwrap(), "Third Trimester");
    }
}
