use serde::{Deserialize, Serialize};

/// Content shown for one gestational week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekContent {
    pub week: u32,
    pub baby_development: String,
    pub pregnancy_symptoms: Vec<String>,
    pub pregnancy_checklist: Vec<String>,
    pub images: Vec<String>,
}
