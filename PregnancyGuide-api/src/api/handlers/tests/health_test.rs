use std::sync::Arc;

use axum::http::{Method, StatusCode};
use pregnancy_guide_domain::health::{ComponentStatus, SystemStatus};
use pregnancy_guide_domain::testing::MockHealthService;

use super::send_json;
use crate::api::routes::{create_app, tests::create_test_state};

#[tokio::test]
async fn test_health_ok() {
    let app = create_app(create_test_state(), Arc::new(MockHealthService::new()));

    let (status, body) = send_json(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["static_data"]["status"], "ok");
    assert_eq!(body["components"]["assistant"]["status"], "ok");
    assert_eq!(body["environment"], "development");
    assert!(body["components"].get("additional").is_none());
}

#[tokio::test]
async fn test_health_degraded_static_data() {
    let service = MockHealthService::new()
        .with_degraded_static_data()
        .with_system_status(SystemStatus::Degraded);
    let app = create_app(create_test_state(), Arc::new(service));

    let (status, body) = send_json(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["components"]["static_data"]["status"], "degraded");
    assert_eq!(body["components"]["static_data"]["message"], "Some tables are empty");
}

#[tokio::test]
async fn test_health_unhealthy() {
    let service = MockHealthService::new()
        .with_unhealthy_static_data()
        .with_system_status(SystemStatus::Unhealthy);
    let app = create_app(create_test_state(), Arc::new(service));

    let (status, body) = send_json(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["components"]["static_data"]["status"], "error");
}

#[tokio::test]
async fn test_health_additional_components() {
    let service = MockHealthService::new().with_component(
        "cache",
        ComponentStatus::Degraded,
        Some("Cache hit rate is low".to_string()),
    );
    let app = create_app(create_test_state(), Arc::new(service));

    let (_, body) = send_json(app, Method::GET, "/health", None).await;

    assert_eq!(body["components"]["additional"]["cache"]["status"], "degraded");
    assert_eq!(body["components"]["additional"]["cache"]["message"], "Cache hit rate is low");
}
