//! Integration tests for notifications and the notification log.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_specific_students_without_ids_is_rejected() {
    let state = common::test_state();

    let (status, json) = common::post_json(
        common::build_test_app(&state),
        "/notifications/send",
        &json!({
            "event_id": "ai_workshop",
            "message": "Bring laptops",
            "recipient_type": "specific_students",
            "recipient_ids": [],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "recipient_ids required for specific_students");

    let (_, json) = common::get_json(common::build_test_app(&state), "/notifications/log").await;
    assert_eq!(json["total_notifications"], 0);
}

#[tokio::test]
async fn test_participants_notification_is_logged() {
    let state = common::test_state();
    for (id, name) in [("s1", "Alice"), ("s2", "Bob")] {
        common::post_json(
            common::build_test_app(&state),
            "/events/hackathon_spring/register",
            &json!({ "student_id": id, "student_name": name }),
        )
        .await;
    }

    let (status, json) = common::post_json(
        common::build_test_app(&state),
        "/notifications/send",
        &json!({
            "event_id": "hackathon_spring",
            "message": "Kickoff moved to 10:00",
            "recipient_type": "all_participants",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Notification sent to 2 recipients");

    let (status, json) =
        common::get_json(common::build_test_app(&state), "/notifications/log").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_notifications"], 1);
    let record = &json["notifications"][0];
    assert_eq!(record["recipient_type"], "all_participants");
    assert_eq!(record["recipients"], json!(["s1", "s2"]));
    assert_eq!(record["message"], "Kickoff moved to 10:00");
}

#[tokio::test]
async fn test_all_participants_of_unknown_event_returns_404() {
    let app = common::build_test_app(&common::test_state());

    let (status, json) = common::post_json(
        app,
        "/notifications/send",
        &json!({
            "event_id": "spring_gala",
            "message": "hello",
            "recipient_type": "all_participants",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}
