use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use pregnancy_guide_domain::testing::{create_mock_health_service, MockAssistantService};

use super::{send, send_json};
use crate::api::routes::{create_app, tests::create_test_state, AppState};

fn app_with(assistant: MockAssistantService) -> axum::Router {
    let state = AppState {
        assistant: Arc::new(assistant),
        ..create_test_state()
    };
    create_app(state, Arc::new(create_mock_health_service()))
}

#[tokio::test]
async fn test_ask_returns_answer_links_and_videos() {
    let (status, body) = send_json(
        app_with(MockAssistantService::new()),
        Method::POST,
        "/api/v1/assistant/ask",
        Some(json!({ "question": "  Is coffee safe?  " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "Is coffee safe?");
    assert_eq!(body["answer"], "Stay hydrated and rest often.");
    assert_eq!(body["links"], json!(["https://example.com/pregnancy"]));
    assert_eq!(body["videos"][0]["video_id"], "mock-video");
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ask_keeps_warnings_with_ok_status() {
    let assistant = MockAssistantService::new().with_warning("Failed to retrieve search results.");
    let (status, body) = send_json(
        app_with(assistant),
        Method::POST,
        "/api/v1/assistant/ask",
        Some(json!({ "question": "Is coffee safe?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warnings"], json!(["Failed to retrieve search results."]));
}

#[tokio::test]
async fn test_ask_empty_question() {
    let (status, body) = send_json(
        app_with(MockAssistantService::new()),
        Method::POST,
        "/api/v1/assistant/ask",
        Some(json!({ "question": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_ask_rejected_by_service() {
    let (status, body) = send_json(
        app_with(MockAssistantService::new().with_validation_failure()),
        Method::POST,
        "/api/v1/assistant/ask",
        Some(json!({ "question": "Is coffee safe?" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_ask_stream_sends_words_then_done() {
    let (status, body) = send(
        app_with(MockAssistantService::new().with_answer("Rest well")),
        Method::POST,
        "/api/v1/assistant/ask/stream",
        Some(json!({ "question": "How should I sleep?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let rest = body.find("data: Rest ").expect("first word streamed");
    let well = body.find("data: well ").expect("second word streamed");
    let done = body.find("data: [DONE]").expect("stream finished");
    assert!(rest < well && well < done);
    assert!(body.contains("event: links"));
    assert!(body.contains("event: videos"));
}

#[tokio::test]
async fn test_ask_stream_rejects_blank_question() {
    let (status, _) = send(
        app_with(MockAssistantService::new()),
        Method::POST,
        "/api/v1/assistant/ask/stream",
        Some(json!({ "question": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
