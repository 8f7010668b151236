use serde::{Deserialize, Serialize};

/// Storage model for the per-week content table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekContentRecord {
    /// Gestational week this row describes
    pub week: u32,

    /// Baby development text
    pub baby_development: String,

    /// Common symptoms for the week
    pub pregnancy_symptoms: Vec<String>,

    /// To-do items for the week
    pub pregnancy_checklist: Vec<String>,

    /// Image URLs illustrating the week
    pub images: Vec<String>,
}
