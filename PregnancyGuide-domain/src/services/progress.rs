use crate::entities::gestation::Trimester;
use crate::entities::progress::{DoughnutSegments, ProgressBarLayout, ProgressSnapshot};

/// Length of a full-term pregnancy in weeks
pub const TOTAL_WEEKS: f64 = 40.0;

/// Last week of the first trimester
pub const FIRST_TRIMESTER_LAST_WEEK: i64 = 13;

/// Last week of the second trimester
pub const SECOND_TRIMESTER_LAST_WEEK: i64 = 27;

/// Trimester boundary lines on the progress bar
pub const PROGRESS_BAR_MARKERS: [f64; 3] = [33.3, 66.6, 99.0];

/// Trimester label centers on the progress bar
pub const TRIMESTER_LABEL_POSITIONS: [f64; 3] = [16.65, 50.0, 82.95];

/// Share of the 40-week term completed at `week`, unclamped
pub fn percentage_completed(week: i64) -> f64 {
    // Multiply first so whole weeks give exact percentages
    (week as f64 * 100.0) / TOTAL_WEEKS
}

/// Trimester for a week; weeks past 27 all count as the third
pub fn trimester_for_week(week: i64) -> Trimester {
    if week <= FIRST_TRIMESTER_LAST_WEEK {
        Trimester::First
    } else if week <= SECOND_TRIMESTER_LAST_WEEK {
        Trimester::Second
    } else {
        Trimester::Third
    }
}

/// Trimester label for a week
pub fn trimester_label(week: i64) -> &'static str {
    trimester_for_week(week).label()
}

/// Doughnut chart values; the remaining share never goes below zero
pub fn doughnut_segments(percentage: f64) -> DoughnutSegments {
    DoughnutSegments {
        completed: percentage,
        remaining: (100.0 - percentage).max(0.0),
    }
}

/// Fixed progress bar layout
pub fn progress_bar_layout() -> ProgressBarLayout {
    ProgressBarLayout {
        markers: PROGRESS_BAR_MARKERS,
        label_positions: TRIMESTER_LABEL_POSITIONS,
    }
}

/// Chart data for an in-range week
pub fn progress_snapshot(week: u32) -> ProgressSnapshot {
    let percentage = percentage_completed(i64::from(week));
    ProgressSnapshot {
        week,
        percentage_completed: percentage,
        trimester: trimester_for_week(i64::from(week)),
        doughnut: doughnut_segments(percentage),
        progress_bar: progress_bar_layout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_completed() {
        assert_eq!(percentage_completed(10), 25.0);
        assert_eq!(percentage_completed(20), 50.0);
        assert_eq!(percentage_completed(40), 100.0);
        assert_eq!(percentage_completed(41), 102.5);
        assert_eq!(percentage_completed(1), 2.5);
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester_label(1), "First Trimester");
        assert_eq!(trimester_label(13), "First Trimester");
        assert_eq!(trimester_label(14), "Second Trimester");
        assert_eq!(trimester_label(27), "Second Trimester");
        assert_eq!(trimester_label(28), "Third Trimester");
        assert_eq!(trimester_label(41), "Third Trimester");
    }

    #[test]
    fn test_doughnut_remaining_never_negative() {
        let segments = doughnut_segments(percentage_completed(41));
        assert_eq!(segments.completed, 102.5);
        assert_eq!(segments.remaining, 0.0);

        let segments = doughnut_segments(percentage_completed(10));
        assert_eq!(segments.remaining, 75.0);
    }

    #[test]
    fn test_progress_snapshot() {
        let snapshot = progress_snapshot(20);

        assert_eq!(snapshot.week, 20);
        assert_eq!(snapshot.percentage_completed, 50.0);
        assert_eq!(snapshot.trimester, Trimester::Second);
        assert_eq!(snapshot.progress_bar.markers, [33.3, 66.6, 99.0]);
        assert_eq!(snapshot.progress_bar.label_positions, [16.65, 50.0, 82.95]);
    }
}
