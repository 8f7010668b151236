use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for the pregnancy tracker
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrackerRequest {
    /// "Conception Date" or "Last Menstrual Period Date"
    #[schema(example = "Last Menstrual Period Date")]
    #[validate(length(min = 1, max = 64, message = "Calculation type is required"))]
    pub calculation_type: String,

    /// Reference date in YYYY-MM-DD form
    #[schema(example = "2024-03-02")]
    #[validate(length(min = 1, max = 32, message = "Date is required"))]
    pub date: String,
}

/// Doughnut chart values
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoughnutChart {
    /// Percentage of the pregnancy completed
    pub completed: f64,
    /// Percentage remaining, never below zero
    pub remaining: f64,
}

/// Vertical trimester progress bar layout, in percent of the bar height
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgressBar {
    /// Trimester boundary lines
    pub markers: Vec<f64>,
    /// Centers of the trimester labels
    pub label_positions: Vec<f64>,
}

/// Chart data for the current week
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub week: u32,
    pub percentage_completed: f64,
    /// Trimester label
    pub trimester: String,
    pub doughnut: DoughnutChart,
    pub progress_bar: ProgressBar,
}

/// Content shown for one week
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekContentResponse {
    pub week: u32,
    pub baby_development: String,
    pub pregnancy_symptoms: Vec<String>,
    pub pregnancy_checklist: Vec<String>,
    /// Image paths or URLs
    pub images: Vec<String>,
}

/// Pregnancy tracker result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackerResponse {
    /// Calculation mode used
    pub calculation_type: String,

    /// Date supplied, YYYY-MM-DD
    pub reference_date: String,

    /// Expected due date, YYYY-MM-DD
    pub due_date: String,

    /// Computed gestational week; may be outside 1-41
    pub week: i64,

    /// Whether charts and week content are available
    pub in_range: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_content: Option<WeekContentResponse>,

    /// Shown instead of the charts for out-of-range weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
