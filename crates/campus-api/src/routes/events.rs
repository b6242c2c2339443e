//! Routes for the event catalog and the Registration bounded context.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use campus_catalog::application::query_handlers::{self as catalog, EventView};
use campus_core::outcome::Outcome;
use campus_registration::application::command_handlers;
use campus_registration::application::query_handlers::{self as registration, ParticipantList};
use campus_registration::domain::commands;
use campus_registration::domain::outcomes::EventSnapshot;

use crate::error::ApiError;
use crate::routes::CommandResponse;
use crate::state::AppState;

/// Request body for POST /events/{event_id}/register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// The student registering.
    pub student_id: String,
    /// Display name used in the response message.
    pub student_name: String,
}

/// Detail fields of a successful registration.
#[derive(Debug, Serialize)]
pub struct RegistrationDetails {
    /// Event summary after the registration.
    pub event_details: EventSnapshot,
}

/// Detail fields of an unregistration; it has none.
#[derive(Debug, Serialize)]
pub struct NoDetails {}

/// GET /events
#[instrument(skip(state))]
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventView>>, ApiError> {
    Ok(Json(catalog::list_events(&state.store)?))
}

/// GET /events/{event_id}
#[instrument(skip(state))]
async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventView>, ApiError> {
    Ok(Json(catalog::get_event(&state.store, &event_id)?))
}

/// POST /events/{event_id}/register
#[instrument(skip(state, request), fields(student_id = %request.student_id))]
async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<CommandResponse<RegistrationDetails>>, ApiError> {
    let command = commands::RegisterStudent {
        correlation_id: Uuid::new_v4(),
        event_id,
        student_id: request.student_id,
        student_name: request.student_name,
    };

    info!(correlation_id = %command.correlation_id, "handling register_student command");

    let outcome = command_handlers::handle_register(&command, &state.store)?
        .map(|registration| (registration.message(), registration.event));

    let response = match outcome {
        Outcome::Success((message, event_details)) => {
            CommandResponse::accepted(message, Some(RegistrationDetails { event_details }))
        }
        Outcome::Failure(reason) => CommandResponse::refused(reason.to_string(), None),
    };

    Ok(Json(response))
}

/// DELETE /events/{event_id}/register/{student_id}
#[instrument(skip(state))]
async fn unregister(
    State(state): State<AppState>,
    Path((event_id, student_id)): Path<(String, String)>,
) -> Result<Json<CommandResponse<NoDetails>>, ApiError> {
    let command = commands::UnregisterStudent {
        correlation_id: Uuid::new_v4(),
        event_id,
        student_id,
    };

    info!(correlation_id = %command.correlation_id, "handling unregister_student command");

    let response = match command_handlers::handle_unregister(&command, &state.store)? {
        Outcome::Success(unregistration) => {
            CommandResponse::accepted(unregistration.message(), None)
        }
        Outcome::Failure(reason) => CommandResponse::refused(reason.to_string(), None),
    };

    Ok(Json(response))
}

/// GET /events/{event_id}/participants
#[instrument(skip(state))]
async fn participants(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<ParticipantList>, ApiError> {
    Ok(Json(registration::list_participants(&state.store, &event_id)?))
}

/// Returns the router for events and registrations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{event_id}", get(get_event))
        .route("/events/{event_id}/register", post(register))
        .route(
            "/events/{event_id}/register/{student_id}",
            delete(unregister),
        )
        .route("/events/{event_id}/participants", get(participants))
}
