//! Integration tests for `POST /api/generate-storyboard`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, build_test_app, post_json};

fn sample_request(title: &str) -> serde_json::Value {
    serde_json::json!({
        "shotlist": {
            "shots": [{
                "shot_id": "S001",
                "scene_id": "SC001",
                "beat_id": "B001_1",
                "shot_type": "WS",
                "action": "Opening frame.",
                "intent": "Advance narrative",
                "camera": {
                    "angle": "eye-level",
                    "height": "chest",
                    "movement": "static",
                    "support": "tripod"
                },
                "lens": {
                    "mm_range": "24mm",
                    "rationale": "Spatial context, geography"
                },
                "continuity_notes": {
                    "line_of_action": "Standard",
                    "eyelines": "N/A",
                    "match_action": "N/A",
                    "props_wardrobe": "Check continuity"
                },
                "sketch_description": "Wide shot of Character in environment"
            }]
        },
        "metadata": { "project_title": title }
    })
}

#[tokio::test]
async fn storyboard_returns_pptx_attachment() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/generate-storyboard",
        sample_request("Chai Ad (v2)"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/vnd.openxmlformats-officedocument.presentationml.presentation")
    );
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"Chai_Ad_v2_Storyboard.pptx\"")
    );
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    let bytes = body_bytes(response).await;
    // PPTX is a zip container
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn storyboard_defaults_title() {
    let app = build_test_app();
    let mut request = sample_request("ignored");
    request["metadata"] = serde_json::json!({});

    let response = post_json(app, "/api/generate-storyboard", request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"Storyboard_Storyboard.pptx\"")
    );
}

#[tokio::test]
async fn storyboard_accepts_empty_shotlist() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/generate-storyboard",
        serde_json::json!({ "shotlist": { "shots": [] } }),
    )
    .await;

    // Title slide only
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn storyboard_rejects_invalid_body() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/generate-storyboard",
        serde_json::json!({ "shotlist": "not-a-shotlist" }),
    )
    .await;
    common::assert_client_error(response.status());
}
