use axum::http::{Method, StatusCode};
use serde_json::json;

use super::send_json;
use crate::api::routes::tests::create_test_app;

fn names(values: &serde_json::Value, field: &str) -> Vec<String> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value[field].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_recommendation_options() {
    let (status, body) = send_json(create_test_app(), Method::GET, "/api/v1/recommendations/options", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trimesters"][0], "First Trimester");
    assert_eq!(body["dietary_restrictions"][0], "None");
    assert_eq!(body["meal_preferences"].as_array().unwrap().len(), 4);
    assert_eq!(body["exercise_types"], json!(["Cardio", "Yoga"]));
}

#[tokio::test]
async fn test_vegan_three_meals() {
    let (status, body) = send_json(
        create_test_app(),
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({
            "trimester": "First Trimester",
            "dietary_restrictions": ["Vegan"],
            "meal_preference": "3 main meals",
            "exercise_types": ["Cardio"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let proteins = &body["diet"][0];
    assert_eq!(proteins["food_group"], "Proteins");
    assert_eq!(proteins["examples"], json!(["beans"]));

    assert_eq!(names(&body["meal_plan"], "meal"), vec!["Breakfast", "Lunch", "Dinner"]);
    assert_eq!(body["meal_plan"][0]["food"], json!(["Banana"]));

    let exercise = &body["exercises"][0];
    assert_eq!(names(&body["exercises"], "exercise"), vec!["Brisk Walking"]);
    assert_eq!(
        exercise["video_url"],
        format!("https://www.youtube.com/embed/{}", exercise["video_id"].as_str().unwrap())
    );
}

#[tokio::test]
async fn test_defaults_keep_everything() {
    let (status, body) = send_json(
        create_test_app(),
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({ "trimester": "First Trimester" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["diet"][0]["examples"].as_array().unwrap().len(), 5);
    assert_eq!(body["meal_plan"].as_array().unwrap().len(), 4);
    assert!(body["exercises"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_trimester_gives_empty_lists() {
    let (status, body) = send_json(
        create_test_app(),
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({ "trimester": "Fourth Trimester", "exercise_types": ["Cardio"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["diet"].as_array().unwrap().is_empty());
    assert!(body["meal_plan"].as_array().unwrap().is_empty());
    assert!(body["exercises"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_too_many_restrictions_rejected() {
    let restrictions: Vec<&str> = std::iter::repeat("Vegan").take(11).collect();
    let (status, body) = send_json(
        create_test_app(),
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({ "trimester": "First Trimester", "dietary_restrictions": restrictions })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}
