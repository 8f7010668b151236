use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Tracker endpoints
        crate::api::handlers::tracker::track_pregnancy,
        crate::api::handlers::tracker::get_week_content,

        // Recommendation endpoints
        crate::api::handlers::recommendations::get_recommendation_options,
        crate::api::handlers::recommendations::create_recommendations,

        // Assistant endpoints
        crate::api::handlers::assistant::ask_assistant,
        crate::api::handlers::assistant::ask_assistant_stream
    ),
    components(
        schemas(
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            // Tracker
            crate::entities::tracker::TrackerRequest,
            crate::entities::tracker::TrackerResponse,
            crate::entities::tracker::ProgressResponse,
            crate::entities::tracker::DoughnutChart,
            crate::entities::tracker::ProgressBar,
            crate::entities::tracker::WeekContentResponse,

            // Recommendations
            crate::entities::recommendations::RecommendationRequest,
            crate::entities::recommendations::RecommendationResponse,
            crate::entities::recommendations::RecommendationOptionsResponse,
            crate::entities::recommendations::DietRecommendationResponse,
            crate::entities::recommendations::MealPlanEntryResponse,
            crate::entities::recommendations::ExerciseResponse,

            // Assistant
            crate::entities::assistant::AskRequest,
            crate::entities::assistant::AskResponse,
            crate::entities::assistant::VideoResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "tracker", description = "Due date, gestational week and weekly content"),
        (name = "recommendations", description = "Diet, meal plan and exercise recommendations"),
        (name = "assistant", description = "Question answering with related links and videos")
    ),
    info(
        title = "PregnancyGuide API",
        version = "0.1.0",
        description = "API for following a pregnancy week by week",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
