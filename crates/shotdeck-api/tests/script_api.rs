//! Integration tests for `POST /api/parse-script`.

mod common;

use axum::http::StatusCode;
use common::{assert_client_error, body_json, build_test_app, post_json};

#[tokio::test]
async fn parse_script_splits_scenes_on_blank_lines() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/parse-script",
        serde_json::json!({
            "raw_script_text": "INT. STUDIO - DAY\nArshdeep walks in.\n\nHe opens the pack.",
            "metadata": { "project_title": "Chai Ad" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let scenes = json["structured_script"]["scenes"].as_array().unwrap();
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0]["scene_id"], "SC001");
    assert_eq!(scenes[0]["slugline"], "INT. STUDIO - DAY");
    assert_eq!(scenes[1]["scene_id"], "SC002");
    assert_eq!(scenes[0]["beats"][0]["beat_id"], "B001");

    assert_eq!(json["metadata_used"]["project_title"], "Chai Ad");
}

#[tokio::test]
async fn parse_script_defaults_metadata() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/parse-script",
        serde_json::json!({ "raw_script_text": "One scene only." }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["metadata_used"]["project_title"], "Storyboard");
    assert_eq!(json["metadata_used"]["aspect_ratio"], "16:9");
}

#[tokio::test]
async fn parse_script_rejects_empty_text() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/parse-script",
        serde_json::json!({ "raw_script_text": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("raw_script_text"));
}

#[tokio::test]
async fn parse_script_rejects_whitespace_only_text() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/parse-script",
        serde_json::json!({ "raw_script_text": "   \n\n  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parse_script_rejects_missing_field() {
    let app = build_test_app();
    let response = post_json(app, "/api/parse-script", serde_json::json!({})).await;
    assert_client_error(response.status());
}
