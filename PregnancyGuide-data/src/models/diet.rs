use serde::{Deserialize, Serialize};

/// Storage model for a diet nutrition row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietRecord {
    /// Trimester label as written in the source table
    pub trimester: String,

    /// Food group name (e.g. "Proteins")
    pub food_group: String,

    /// Example foods, in table order
    pub examples: Vec<String>,
}
