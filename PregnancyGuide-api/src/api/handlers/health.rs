use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::{Arc, Once};
use once_cell::sync::OnceCell;
use async_trait::async_trait;
// Use the trait from domain layer
use pregnancy_guide_domain::config::AppConfig;
use pregnancy_guide_domain::entities::assistant::AssistantStatus;
use pregnancy_guide_domain::health::{
    self, ComponentStatus as DomainComponentStatus, HealthServiceTrait, SystemHealth, SystemStatus,
    ASSISTANT_COMPONENT, STATIC_DATA_COMPONENT,
};
use pregnancy_guide_domain::TableCounts;

/// Health check response model with system information
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Static table status
    pub static_data: ComponentHealthStatus,
    /// Assistant backend configuration
    pub assistant: ComponentHealthStatus,
    /// Additional components (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<serde_json::Value>,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = SERVER_START_TIME.set(start_time);
    });
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 500, description = "API is not healthy", body = HealthResponse),
        (status = 503, description = "API is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service, config))]
pub async fn health_check(
    Extension(health_service): Extension<Arc<dyn HealthServiceTrait + Send + Sync>>,
    State(config): State<Arc<AppConfig>>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let mut component_statuses = ComponentStatus {
        static_data: component_health(&system_health, STATIC_DATA_COMPONENT),
        assistant: component_health(&system_health, ASSISTANT_COMPONENT),
        additional: None,
    };

    // Anything beyond the two known components goes into a free-form object
    let additional: serde_json::Map<String, serde_json::Value> = system_health
        .components
        .iter()
        .filter(|(name, _)| name.as_str() != STATIC_DATA_COMPONENT && name.as_str() != ASSISTANT_COMPONENT)
        .map(|(name, component)| {
            (
                name.clone(),
                serde_json::json!({
                    "status": map_component_status(&component.status),
                    "message": component.details,
                }),
            )
        })
        .collect();
    if !additional.is_empty() {
        component_statuses.additional = Some(additional.into());
    }

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: component_statuses,
        environment: config.environment.clone(),
    };

    let status = match system_health.status {
        SystemStatus::Healthy => StatusCode::OK,
        SystemStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        SystemStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(response))
}

fn component_health(system_health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    let component = system_health.components.get(name);
    ComponentHealthStatus {
        status: map_component_status(
            &component.map(|c| c.status.clone()).unwrap_or(DomainComponentStatus::Healthy),
        ),
        message: component.and_then(|c| c.details.clone()),
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}

/// Health service over the loaded tables and the assistant configuration
#[derive(Debug)]
pub struct HealthService {
    table_counts: TableCounts,
    assistant: AssistantStatus,
}

impl HealthService {
    /// Create a new health service
    pub fn new(table_counts: TableCounts, assistant: AssistantStatus) -> Self {
        Self {
            table_counts,
            assistant,
        }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        health::get_system_health(&self.table_counts, &self.assistant)
    }

    async fn check_static_data_status(&self) -> Result<bool, String> {
        health::check_static_data_status(&self.table_counts)
    }
}

/// Factory function to create a health service
pub fn create_health_service(
    table_counts: TableCounts,
    assistant: AssistantStatus,
) -> Arc<dyn HealthServiceTrait + Send + Sync> {
    Arc::new(HealthService::new(table_counts, assistant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pregnancy_guide_domain::testing::create_mock_health_service;

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig::from_lookup(|_| None))
    }

    #[tokio::test]
    async fn test_health_check_response() {
        initialize_server_start_time();

        let health_service = Arc::new(create_mock_health_service()) as Arc<dyn HealthServiceTrait + Send + Sync>;

        let response = health_check(Extension(health_service), State(test_config()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_service_reports_missing_keys() {
        let counts = TableCounts {
            diet: 18,
            meal_plans: 12,
            exercises: 13,
            weeks: 41,
        };
        let assistant = AssistantStatus {
            llm_configured: false,
            web_search_configured: true,
            video_search_configured: true,
        };

        let service = HealthService::new(counts, assistant);
        let health = service.get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        assert_eq!(
            health.components[ASSISTANT_COMPONENT].details.as_deref(),
            Some("Not configured: LLM")
        );
        assert_eq!(service.check_static_data_status().await, Ok(true));
    }

    #[tokio::test]
    async fn test_health_check_stays_ok_without_keys() {
        let counts = TableCounts {
            diet: 18,
            meal_plans: 12,
            exercises: 13,
            weeks: 41,
        };
        let assistant = AssistantStatus {
            llm_configured: false,
            web_search_configured: false,
            video_search_configured: false,
        };
        let health_service = create_health_service(counts, assistant);

        let response = health_check(Extension(health_service), State(test_config()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check_empty_table_is_unavailable() {
        let counts = TableCounts {
            diet: 18,
            meal_plans: 0,
            exercises: 13,
            weeks: 41,
        };
        let assistant = AssistantStatus {
            llm_configured: true,
            web_search_configured: true,
            video_search_configured: true,
        };
        let health_service = create_health_service(counts, assistant);

        let response = health_check(Extension(health_service), State(test_config()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
