use serde::{Deserialize, Serialize};

/// Storage model for a sample diet chart row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanRecord {
    /// Trimester label as written in the source table
    pub trimester: String,

    /// Meal label (Breakfast, Lunch, Dinner or Snack)
    pub meal: String,

    /// Food items served with the meal, in table order
    pub food: Vec<String>,
}
