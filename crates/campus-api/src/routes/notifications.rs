//! Routes for the Notification bounded context.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use campus_core::outcome::Outcome;
use campus_notification::application::command_handlers;
use campus_notification::application::query_handlers::{self, NotificationHistory};
use campus_notification::domain::commands;
use campus_notification::domain::outcomes::NotificationSent;
use campus_notification::domain::recipients::RecipientType;

use crate::error::ApiError;
use crate::routes::CommandResponse;
use crate::state::AppState;

/// Request body for POST /notifications/send.
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    /// The event the notification concerns.
    pub event_id: String,
    /// Message body.
    pub message: String,
    /// One of `all_participants`, `specific_students`, `all_students`.
    pub recipient_type: String,
    /// Explicit recipients for `specific_students`.
    pub recipient_ids: Option<Vec<String>>,
}

/// Detail fields of a sent notification.
#[derive(Debug, Serialize)]
pub struct SendDetails {
    /// Receipt for the recorded notification.
    pub details: NotificationSent,
}

/// POST /notifications/send
#[instrument(
    skip(state, request),
    fields(event_id = %request.event_id, recipient_type = %request.recipient_type)
)]
async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<CommandResponse<SendDetails>>, ApiError> {
    let recipient_type: RecipientType = request.recipient_type.parse()?;
    let command = commands::SendNotification {
        correlation_id: Uuid::new_v4(),
        event_id: request.event_id,
        message: request.message,
        recipient_type,
        recipient_ids: request.recipient_ids,
    };

    info!(correlation_id = %command.correlation_id, "handling send_notification command");

    let outcome = command_handlers::handle_send(
        &command,
        state.clock.as_ref(),
        &state.store,
        &state.ledger,
    )?;

    let response = match outcome {
        Outcome::Success(sent) => {
            CommandResponse::accepted(sent.message(), Some(SendDetails { details: sent }))
        }
        Outcome::Failure(reason) => CommandResponse::refused(reason.to_string(), None),
    };

    Ok(Json(response))
}

/// GET /notifications/log
#[instrument(skip(state))]
async fn notification_log(
    State(state): State<AppState>,
) -> Result<Json<NotificationHistory>, ApiError> {
    Ok(Json(query_handlers::history(&state.ledger)?))
}

/// Returns the router for the notification context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications/send", post(send_notification))
        .route("/notifications/log", get(notification_log))
}
