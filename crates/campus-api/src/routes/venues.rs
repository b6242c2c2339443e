//! Routes for the venue catalog and the Booking bounded context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use campus_booking::application::command_handlers;
use campus_booking::application::query_handlers::{Availability, check_availability};
use campus_booking::domain::commands;
use campus_booking::domain::outcomes::{BookingFailure, BookingSummary};
use campus_catalog::application::query_handlers::{self as catalog, VenueView};
use campus_catalog::domain::venue::Booking;
use campus_core::outcome::Outcome;

use crate::error::ApiError;
use crate::routes::CommandResponse;
use crate::state::AppState;

/// Query string for GET /venues/{venue_id}/availability.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    /// Calendar date to check.
    pub date: String,
    /// Slot to check; the whole day is summarised when absent.
    pub time_slot: Option<String>,
}

/// Request body for POST /venues/{venue_id}/book.
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    /// The club booking the venue.
    pub club_name: String,
    /// Calendar date.
    pub date: String,
    /// Slot label.
    pub time_slot: String,
    /// What the venue is booked for.
    pub purpose: String,
    /// Expected headcount.
    pub expected_attendees: u32,
}

/// Detail fields of a booking response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BookingDetails {
    /// The booking was accepted.
    Booked {
        /// Summary of the accepted booking.
        booking_details: BookingSummary,
    },
    /// The slot was already taken.
    Conflict {
        /// The booking holding the slot.
        existing_booking: Booking,
    },
}

/// GET /venues
#[instrument(skip(state))]
async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<VenueView>>, ApiError> {
    Ok(Json(catalog::list_venues(&state.store)?))
}

/// GET /venues/{venue_id}
#[instrument(skip(state))]
async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Json<VenueView>, ApiError> {
    Ok(Json(catalog::get_venue(&state.store, &venue_id)?))
}

/// GET /venues/{venue_id}/availability
#[instrument(skip(state, params), fields(date = %params.date))]
async fn availability(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Availability>, ApiError> {
    let availability = check_availability(
        &state.store,
        &venue_id,
        &params.date,
        params.time_slot.as_deref(),
    )?;
    Ok(Json(availability))
}

/// POST /venues/{venue_id}/book
#[instrument(skip(state, request), fields(club_name = %request.club_name, date = %request.date))]
async fn book(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Json(request): Json<BookRequest>,
) -> Result<Json<CommandResponse<BookingDetails>>, ApiError> {
    let command = commands::BookVenue {
        correlation_id: Uuid::new_v4(),
        venue_id,
        club_name: request.club_name,
        date: request.date,
        time_slot: request.time_slot,
        purpose: request.purpose,
        expected_attendees: request.expected_attendees,
    };

    info!(correlation_id = %command.correlation_id, "handling book_venue command");

    let outcome = command_handlers::handle_book(&command, state.clock.as_ref(), &state.store)?;

    let response = match outcome {
        Outcome::Success(summary) => CommandResponse::accepted(
            summary.message(),
            Some(BookingDetails::Booked {
                booking_details: summary,
            }),
        ),
        Outcome::Failure(reason) => {
            let message = reason.to_string();
            let details = match reason {
                BookingFailure::SlotTaken { existing, .. } => Some(BookingDetails::Conflict {
                    existing_booking: *existing,
                }),
                BookingFailure::CapacityExceeded { .. } => None,
            };
            CommandResponse::refused(message, details)
        }
    };

    Ok(Json(response))
}

/// Returns the router for venues and bookings.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/{venue_id}", get(get_venue))
        .route("/venues/{venue_id}/availability", get(availability))
        .route("/venues/{venue_id}/book", post(book))
}
