//! Integration tests for event listing and registration.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_events_in_seed_order() {
    let app = common::build_test_app(&common::test_state());

    let (status, json) = common::get_json(app, "/events").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["techfest2024", "hackathon_spring", "ai_workshop", "robotics_demo"]
    );
}

#[tokio::test]
async fn test_register_then_duplicate_is_refused() {
    let state = common::test_state();
    let body = json!({ "student_id": "s1", "student_name": "Alice" });

    // Register s1 for the AI workshop.
    let (status, json) = common::post_json(
        common::build_test_app(&state),
        "/events/ai_workshop/register",
        &body,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["event_details"]["participants_count"], 1);

    // The same student again.
    let (status, json) = common::post_json(
        common::build_test_app(&state),
        "/events/ai_workshop/register",
        &body,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Student Alice is already registered for AI & Machine Learning Workshop"
    );

    // Participant list is unchanged.
    let (status, json) =
        common::get_json(common::build_test_app(&state), "/events/ai_workshop/participants").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["participant_count"], 1);
    assert_eq!(json["participants"], json!(["s1"]));
}

#[tokio::test]
async fn test_unregister_round_trip() {
    let state = common::test_state();
    common::post_json(
        common::build_test_app(&state),
        "/events/techfest2024/register",
        &json!({ "student_id": "s7", "student_name": "Grace" }),
    )
    .await;

    let (status, json) = common::delete_json(
        common::build_test_app(&state),
        "/events/techfest2024/register/s7",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Successfully unregistered from TechFest 2024");

    let (_, json) = common::delete_json(
        common::build_test_app(&state),
        "/events/techfest2024/register/s7",
    )
    .await;
    assert_eq!(json["success"], false);

    let (_, json) = common::get_json(common::build_test_app(&state), "/events/techfest2024").await;
    assert_eq!(json["participants"], json!([]));
}

#[tokio::test]
async fn test_get_unknown_event_returns_404() {
    let app = common::build_test_app(&common::test_state());

    let (status, json) = common::get_json(app, "/events/spring_gala").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}
