// Domain entities and value objects
pub mod assistant;
pub mod conversions;
pub mod gestation;
pub mod progress;
pub mod recommendations;
pub mod tracker;
pub mod weekly;

// Re-export common types for easier imports
pub use assistant::{AssistantAnswer, AssistantStatus, RelatedVideo};
pub use gestation::{CalculationMode, DueDateEstimate, GestationInput, InvalidModeError, Trimester, WeekOfPregnancy};
pub use progress::{DoughnutSegments, ProgressBarLayout, ProgressSnapshot};
pub use recommendations::{
    DietRecommendation, Meal, MealPlanEntry, MealPreference, RecommendationCatalog, RecommendationOptions,
    Recommendations, Restriction, RestrictionSet,
};
pub use tracker::TrackerResult;
pub use weekly::WeekContent;
