use axum::{
    extract::FromRef,
    http::{header, Method},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use pregnancy_guide_data::repository::{RepositoryError, StaticDataRepositoryTrait};
use pregnancy_guide_domain::config::AppConfig;
use pregnancy_guide_domain::health::HealthServiceTrait;
use pregnancy_guide_domain::services::{
    create_default_assistant_service, create_default_recommendation_service, create_default_tracker_service,
    AssistantServiceError,
};
use pregnancy_guide_domain::StaticDataRepository;

use crate::api::handlers::assistant::{self, SharedAssistantService};
use crate::api::handlers::health;
use crate::api::handlers::recommendations::{self, SharedRecommendationService};
use crate::api::handlers::tracker::{self, SharedTrackerService};
use crate::openapi::configure_swagger_routes;

/// Services shared by every handler
#[derive(Clone, FromRef)]
pub struct AppState {
    pub tracker: SharedTrackerService,
    pub recommendations: SharedRecommendationService,
    pub assistant: SharedAssistantService,
    pub config: Arc<AppConfig>,
}

/// Errors raised while wiring the application at startup
#[derive(Debug, Error)]
pub enum AppBuildError {
    #[error("Failed to load static tables: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Failed to configure the assistant: {0}")]
    Assistant(#[from] AssistantServiceError),
}

/// Create the application router
pub fn create_app(state: AppState, health_service: Arc<dyn HealthServiceTrait + Send + Sync>) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/tracker", post(tracker::track_pregnancy))
        .route("/weeks/:week", get(tracker::get_week_content))
        // Define specific routes before parametrized routes to avoid conflicts
        .route("/recommendations/options", get(recommendations::get_recommendation_options))
        .route("/recommendations", post(recommendations::create_recommendations))
        .route("/assistant/ask/stream", post(assistant::ask_assistant_stream))
        .route("/assistant/ask", post(assistant::ask_assistant));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    debug!("API routes nested");

    let app = add_swagger_ui(app);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http()).layer(cors)
}

/// Load the tables and build the clients described by `config`, then create the router
pub fn create_app_from_config(config: &AppConfig) -> Result<Router, AppBuildError> {
    let repository = StaticDataRepository::load(&config.table_source())?;
    let table_counts = repository.table_counts();
    info!(
        "Loaded static tables: {} diet rows, {} meal plan rows, {} exercises, {} weeks",
        table_counts.diet, table_counts.meal_plans, table_counts.exercises, table_counts.weeks
    );

    let assistant = create_default_assistant_service(config)?;
    let health_service = health::create_health_service(table_counts, assistant.status());

    let state = AppState {
        recommendations: Arc::new(create_default_recommendation_service(&repository)),
        tracker: Arc::new(create_default_tracker_service(repository)),
        assistant,
        config: Arc::new(config.clone()),
    };

    Ok(create_app(state, health_service))
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}
