use chrono::{Duration, Local, NaiveDate};

use crate::entities::gestation::{CalculationMode, DueDateEstimate, GestationInput, WeekOfPregnancy};

/// Days from conception to the expected due date (38 weeks)
pub const CONCEPTION_TO_DUE_DAYS: i64 = 38 * 7;

/// Days from the last menstrual period to the expected due date (40 weeks)
pub const LMP_TO_DUE_DAYS: i64 = 40 * 7;

/// Days between the last menstrual period and conception assumed by the week count
pub const CONCEPTION_OFFSET_DAYS: i64 = 14;

/// Only accepted date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Due date from a conception date
pub fn due_date_from_conception(conception: NaiveDate) -> NaiveDate {
    conception + Duration::days(CONCEPTION_TO_DUE_DAYS)
}

/// Due date from the first day of the last menstrual period
pub fn due_date_from_lmp(lmp: NaiveDate) -> NaiveDate {
    lmp + Duration::days(LMP_TO_DUE_DAYS)
}

/// Due date for an input in either mode
pub fn due_date(input: &GestationInput) -> DueDateEstimate {
    let due_date = match input.mode {
        CalculationMode::Conception => due_date_from_conception(input.reference_date),
        CalculationMode::LastMenstrualPeriod => due_date_from_lmp(input.reference_date),
    };
    DueDateEstimate { due_date }
}

/// Reference date normalized to a last menstrual period
pub fn effective_lmp(input: &GestationInput) -> NaiveDate {
    match input.mode {
        CalculationMode::Conception => input.reference_date - Duration::days(CONCEPTION_OFFSET_DAYS),
        CalculationMode::LastMenstrualPeriod => input.reference_date,
    }
}

/// Raw gestational week on `today`: floor(days since effective LMP / 7) + 1
///
/// Floor division keeps future reference dates at zero or below.
pub fn gestational_week_number(input: &GestationInput, today: NaiveDate) -> i64 {
    let days_elapsed = (today - effective_lmp(input)).num_days();
    days_elapsed.div_euclid(7) + 1
}

/// Gestational week on `today`, classified for display
pub fn gestational_week(input: &GestationInput, today: NaiveDate) -> WeekOfPregnancy {
    WeekOfPregnancy::from_week(gestational_week_number(input, today))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // Reject short years and other lenient forms chrono would accept
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
