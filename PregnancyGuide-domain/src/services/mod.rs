pub mod assistant;
pub mod date_math;
pub mod progress;
pub mod recommendations;
pub mod tracker;

// Domain services
// This module contains business logic implementations.

use std::sync::Arc;

use crate::config::AppConfig;
use pregnancy_guide_data::repository::StaticDataRepository;

// Re-export service traits and their errors
pub use assistant::{AssistantService, AssistantServiceError, AssistantServiceTrait};
pub use recommendations::{RecommendationQuery, RecommendationService, RecommendationServiceTrait};
pub use tracker::{TrackerService, TrackerServiceError, TrackerServiceTrait};

/// Create the tracker over the loaded static tables
pub fn create_default_tracker_service(repository: StaticDataRepository) -> impl TrackerServiceTrait {
    TrackerService::new(repository)
}

/// Create the recommendation service over the loaded static tables
pub fn create_default_recommendation_service(repository: &StaticDataRepository) -> impl RecommendationServiceTrait {
    RecommendationService::from_repository(repository)
}

/// Create the assistant with HTTP clients built from configuration
pub fn create_default_assistant_service(
    config: &AppConfig,
) -> Result<Arc<dyn AssistantServiceTrait + Send + Sync>, AssistantServiceError> {
    Ok(Arc::new(AssistantService::from_config(config)?))
}

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use crate::testing::{create_mock_assistant_service, create_mock_recommendation_service, create_mock_tracker_service};
