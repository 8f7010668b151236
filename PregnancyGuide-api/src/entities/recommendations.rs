use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for diet and exercise recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendationRequest {
    /// "First Trimester", "Second Trimester" or "Third Trimester"
    #[schema(example = "Second Trimester")]
    #[validate(length(max = 64, message = "Trimester cannot exceed 64 characters"))]
    pub trimester: String,

    /// Any of "None", "Vegetarian", "Vegan", "Gluten-Free", "Lactose Intolerant"
    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 dietary restrictions are accepted"))]
    pub dietary_restrictions: Vec<String>,

    /// "2 main meals", "3 main meals", "3 main meals with snacks" or "Flexible"
    #[serde(default = "default_meal_preference")]
    #[schema(example = "3 main meals")]
    pub meal_preference: String,

    /// Exercise types as listed by the options endpoint
    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 exercise types are accepted"))]
    pub exercise_types: Vec<String>,
}

fn default_meal_preference() -> String {
    "Flexible".to_string()
}

/// Food group with the examples left after filtering
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DietRecommendationResponse {
    pub food_group: String,
    pub examples: Vec<String>,
}

/// Meal of the sample diet chart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealPlanEntryResponse {
    pub meal: String,
    pub food: Vec<String>,
}

/// Recommended exercise
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub exercise_type: String,
    pub exercise: String,
    pub description: String,
    /// Description split into its sentences
    pub description_points: Vec<String>,
    pub video_id: String,
    /// Embeddable video URL
    pub video_url: String,
}

/// Diet, meal plan and exercise recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    pub diet: Vec<DietRecommendationResponse>,
    pub meal_plan: Vec<MealPlanEntryResponse>,
    pub exercises: Vec<ExerciseResponse>,
}

/// Choices offered by the recommendations form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationOptionsResponse {
    pub trimesters: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub meal_preferences: Vec<String>,
    pub exercise_types: Vec<String>,
}
