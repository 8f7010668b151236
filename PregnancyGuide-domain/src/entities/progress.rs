use serde::{Deserialize, Serialize};

use super::gestation::Trimester;

/// Completed and remaining shares of the doughnut chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoughnutSegments {
    /// Percentage completed
    pub completed: f64,

    /// Percentage remaining, never below zero
    pub remaining: f64,
}

/// Fixed positions of the vertical trimester progress bar, in percent of its height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarLayout {
    /// Marker lines separating the trimesters
    pub markers: [f64; 3],

    /// Vertical centers of the trimester labels
    pub label_positions: [f64; 3],
}

/// Everything a chart renderer needs for one in-range week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Gestational week
    pub week: u32,

    /// Share of the 40-week term completed, unclamped
    pub percentage_completed: f64,

    /// Trimester the week falls in
    pub trimester: Trimester,

    /// Doughnut chart values
    pub doughnut: DoughnutSegments,

    /// Progress bar markers and label positions
    pub progress_bar: ProgressBarLayout,
}
