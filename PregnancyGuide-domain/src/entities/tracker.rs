use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::gestation::{CalculationMode, WeekOfPregnancy};
use super::progress::ProgressSnapshot;
use super::weekly::WeekContent;

/// Warning shown instead of the charts when the week cannot be displayed
pub const OUT_OF_RANGE_WARNING: &str =
    "The calculated week number is out of the valid range (1-40). Please check the input date.";

/// Result of one tracker submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerResult {
    /// Mode the reference date was interpreted with
    pub calculation_type: CalculationMode,

    /// Date supplied by the user
    pub reference_date: NaiveDate,

    /// Expected due date
    pub due_date: NaiveDate,

    /// Computed gestational week
    pub week: WeekOfPregnancy,

    /// Chart data, only for in-range weeks
    pub progress: Option<ProgressSnapshot>,

    /// Week content, only for in-range weeks
    pub week_content: Option<WeekContent>,

    /// Warning for out-of-range weeks
    pub warning: Option<String>,
}
