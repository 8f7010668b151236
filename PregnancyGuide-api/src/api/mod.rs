pub mod handlers;
pub mod routes;


use axum::Router;
use pregnancy_guide_domain::config::AppConfig;

/// Create the application router
pub fn create_application(config: &AppConfig) -> Result<Router, routes::AppBuildError> {
    routes::create_app_from_config(config)
}
