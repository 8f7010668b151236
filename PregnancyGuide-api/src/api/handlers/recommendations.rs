use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, instrument, warn};
use validator::Validate;

use pregnancy_guide_domain::entities::assistant::YOUTUBE_EMBED_BASE_URL;
use pregnancy_guide_domain::entities::recommendations::{ExerciseRecord, Recommendations};
use pregnancy_guide_domain::services::{RecommendationQuery, RecommendationServiceTrait};

use crate::entities::common::{validation_details, ErrorResponse};
use crate::entities::recommendations::{
    DietRecommendationResponse, ExerciseResponse, MealPlanEntryResponse, RecommendationOptionsResponse,
    RecommendationRequest, RecommendationResponse,
};

/// Service type for dependency injection
pub type SharedRecommendationService = Arc<dyn RecommendationServiceTrait + Send + Sync>;

/// List the choices offered by the recommendations form
#[utoipa::path(
    get,
    path = "/api/v1/recommendations/options",
    responses(
        (status = 200, description = "Form vocabularies", body = RecommendationOptionsResponse),
    ),
    tag = "recommendations"
)]
#[instrument(skip(service))]
pub async fn get_recommendation_options(
    State(service): State<SharedRecommendationService>,
) -> impl IntoResponse {
    let options = service.options();
    Json(RecommendationOptionsResponse {
        trimesters: options.trimesters,
        dietary_restrictions: options.dietary_restrictions,
        meal_preferences: options.meal_preferences,
        exercise_types: options.exercise_types,
    })
}

/// Filter the diet, meal plan and exercise tables for one submission
#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "Recommendations; unknown trimesters give empty lists", body = RecommendationResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "recommendations"
)]
#[instrument(skip(service, request))]
pub async fn create_recommendations(
    State(service): State<SharedRecommendationService>,
    Json(request): Json<RecommendationRequest>,
) -> Result<impl IntoResponse, Response> {
    info!("Building recommendations for {}", request.trimester);

    if let Err(errors) = request.validate() {
        warn!("Invalid recommendation request: {}", errors);
        return Err(ErrorResponse::validation_error(
            "Invalid recommendation request",
            Some(validation_details(&errors)),
        )
        .into_response());
    }

    let query = RecommendationQuery {
        trimester: request.trimester,
        dietary_restrictions: request.dietary_restrictions,
        meal_preference: request.meal_preference,
        exercise_types: request.exercise_types,
    };

    let recommendations = service.recommend(&query);
    Ok((StatusCode::OK, Json(convert_to_public_recommendations(recommendations))))
}

fn convert_to_public_exercise(record: ExerciseRecord) -> ExerciseResponse {
    ExerciseResponse {
        description_points: record.description_points(),
        video_url: format!("{}{}", YOUTUBE_EMBED_BASE_URL, record.video_id),
        exercise_type: record.exercise_type,
        exercise: record.exercise,
        description: record.description,
        video_id: record.video_id,
    }
}

fn convert_to_public_recommendations(recommendations: Recommendations) -> RecommendationResponse {
    RecommendationResponse {
        diet: recommendations
            .diet
            .into_iter()
            .map(|row| DietRecommendationResponse {
                food_group: row.food_group,
                examples: row.examples,
            })
            .collect(),
        meal_plan: recommendations
            .meal_plan
            .into_iter()
            .map(|entry| MealPlanEntryResponse {
                meal: entry.meal.label().to_string(),
                food: entry.food,
            })
            .collect(),
        exercises: recommendations.exercises.into_iter().map(convert_to_public_exercise).collect(),
    }
}
