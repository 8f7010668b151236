use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::entities::conversions::convert_to_domain_week_content;
use crate::entities::gestation::{CalculationMode, GestationInput, InvalidModeError, WeekOfPregnancy};
use crate::entities::tracker::{TrackerResult, OUT_OF_RANGE_WARNING};
use crate::entities::weekly::WeekContent;
use crate::services::date_math;
use crate::services::progress::progress_snapshot;
use pregnancy_guide_data::repository::{RepositoryError, StaticDataRepositoryTrait};

/// Tracker service errors
#[derive(Debug, Error)]
pub enum TrackerServiceError {
    /// Calculation mode label not recognized
    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    /// Date not in YYYY-MM-DD form
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    /// No content row for an in-range week
    #[error("Data not found: {0}")]
    DataNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for TrackerServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => TrackerServiceError::DataNotFound(msg),
            other => TrackerServiceError::RepositoryError(other.to_string()),
        }
    }
}

/// Trait for pregnancy tracker operations
pub trait TrackerServiceTrait: Send + Sync {
    /// Due date, week, chart data and week content for a mode label and date string
    fn track(&self, mode_label: &str, date: &str) -> Result<TrackerResult, TrackerServiceError>;

    /// Content for a single week
    fn week_content(&self, week: i64) -> Result<WeekContent, TrackerServiceError>;
}

/// Tracker over the static week table
pub struct TrackerService<R: StaticDataRepositoryTrait> {
    repository: R,
    today: fn() -> NaiveDate,
}

impl<R: StaticDataRepositoryTrait> TrackerService<R> {
    /// Create a tracker that reads the local calendar date on every call
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, date_math::today)
    }

    /// Create a tracker with a fixed source for the current date
    pub fn with_clock(repository: R, today: fn() -> NaiveDate) -> Self {
        Self { repository, today }
    }

    /// Compute the tracker result for an already parsed input
    pub fn track_input(&self, input: GestationInput) -> Result<TrackerResult, TrackerServiceError> {
        let today = (self.today)();
        let due = date_math::due_date(&input);
        let week = date_math::gestational_week(&input, today);

        debug!(
            mode = %input.mode,
            reference_date = %input.reference_date,
            week = week.number(),
            "Computed gestational week"
        );

        let mut result = TrackerResult {
            calculation_type: input.mode,
            reference_date: input.reference_date,
            due_date: due.due_date,
            week,
            progress: None,
            week_content: None,
            warning: None,
        };

        match week {
            WeekOfPregnancy::InRange(number) => {
                result.progress = Some(progress_snapshot(number));
                result.week_content = Some(self.lookup_week(number)?);
            }
            WeekOfPregnancy::OutOfRange(number) => {
                warn!(week = number, "Calculated week is out of range");
                result.warning = Some(OUT_OF_RANGE_WARNING.to_string());
            }
        }

        Ok(result)
    }

    fn lookup_week(&self, week: u32) -> Result<WeekContent, TrackerServiceError> {
        let record = self.repository.week_content(week)?;
        Ok(convert_to_domain_week_content(record))
    }
}

impl<R: StaticDataRepositoryTrait> TrackerServiceTrait for TrackerService<R> {
    #[instrument(skip(self))]
    fn track(&self, mode_label: &str, date: &str) -> Result<TrackerResult, TrackerServiceError> {
        let mode: CalculationMode = mode_label.parse()?;
        let reference_date =
            date_math::parse_date(date).ok_or_else(|| TrackerServiceError::InvalidDate(date.to_string()))?;

        let result = self.track_input(GestationInput::new(reference_date, mode))?;
        info!(week = result.week.number(), due_date = %result.due_date, "Tracked pregnancy");
        Ok(result)
    }

    #[instrument(skip(self))]
    fn week_content(&self, week: i64) -> Result<WeekContent, TrackerServiceError> {
        match WeekOfPregnancy::from_week(week) {
            WeekOfPregnancy::InRange(number) => self.lookup_week(number),
            WeekOfPregnancy::OutOfRange(number) => {
                Err(TrackerServiceError::DataNotFound(format!("No content for week {}", number)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::gestation::Trimester;
    use pregnancy_guide_data::repository::tests::{week_row, MockStaticDataRepository};
    use pregnancy_guide_data::repository::StaticDataRepository;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn bundled_tracker() -> TrackerService<StaticDataRepository> {
        TrackerService::with_clock(StaticDataRepository::bundled().unwrap(), fixed_today)
    }

    #[test]
    fn test_track_lmp_in_range() {
        let tracker = bundled_tracker();

        // 2024-03-02 is 91 days before 2024-06-01
        let result = tracker.track("Last Menstrual Period Date", "2024-03-02").unwrap();

        assert_eq!(result.week, WeekOfPregnancy::InRange(14));
        assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 12, 7).unwrap());
        let progress = result.progress.unwrap();
        assert_eq!(progress.percentage_completed, 35.0);
        assert_eq!(progress.trimester, Trimester::Second);
        assert_eq!(result.week_content.unwrap().week, 14);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_track_conception_today() {
        let tracker = bundled_tracker();
        let result = tracker.track("Conception Date", "2024-06-01").unwrap();

        assert_eq!(result.week, WeekOfPregnancy::InRange(3));
        assert_eq!(result.calculation_type, CalculationMode::Conception);
    }

    #[test]
    fn test_track_future_date_warns() {
        let tracker = bundled_tracker();
        let result = tracker.track("Last Menstrual Period Date", "2024-07-01").unwrap();

        assert!(!result.week.is_in_range());
        assert!(result.progress.is_none());
        assert!(result.week_content.is_none());
        assert_eq!(result.warning.as_deref(), Some(OUT_OF_RANGE_WARNING));
    }

    #[test]
    fn test_track_rejects_unknown_mode() {
        let tracker = bundled_tracker();
        let err = tracker.track("Ovulation Date", "2024-03-02").unwrap_err();

        assert!(matches!(err, TrackerServiceError::InvalidMode(_)));
    }

    #[test]
    fn test_track_rejects_bad_date() {
        let tracker = bundled_tracker();
        let err = tracker.track("Conception Date", "03/02/2024").unwrap_err();

        assert!(matches!(err, TrackerServiceError::InvalidDate(_)));
    }

    #[test]
    fn test_missing_week_row_is_data_not_found() {
        let repository = MockStaticDataRepository::new().with_weeks(vec![week_row(2)]);
        let tracker = TrackerService::with_clock(repository, fixed_today);

        let err = tracker.track("Last Menstrual Period Date", "2024-06-01").unwrap_err();
        assert!(matches!(err, TrackerServiceError::DataNotFound(_)));
    }

    #[test]
    fn test_week_content_lookup() {
        let tracker = bundled_tracker();

        let content = tracker.week_content(8).unwrap();
        assert_eq!(content.week, 8);
        assert!(content.pregnancy_symptoms.iter().any(|symptom| symptom.contains("Nausea")));

        assert!(matches!(tracker.week_content(0), Err(TrackerServiceError::DataNotFound(_))));
        assert!(matches!(tracker.week_content(42), Err(TrackerServiceError::DataNotFound(_))));
    }
}
