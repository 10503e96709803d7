use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::{
        api::SuccessDto,
        venue::{CreateVenueDto, UpdateVenueDto},
    },
    service::{event::EventService, venue::VenueService},
    state::AppState,
};

/// GET /api/venues
/// List all venues
pub async fn list_venues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let venues = VenueService::new(&state.db).list().await?;
    Ok((StatusCode::OK, Json(venues)))
}

/// GET /api/venues/{id}
/// Get a single venue
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).get(id).await?;
    Ok((StatusCode::OK, Json(venue)))
}

/// POST /api/venues
/// Create a venue
pub async fn create_venue(
    State(state): State<AppState>,
    Json(dto): Json<CreateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).create(dto).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// PATCH /api/venues/{id}
/// Partially update a venue
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueService::new(&state.db).update(id, dto).await?;
    Ok((StatusCode::OK, Json(venue)))
}

/// DELETE /api/venues/{id}
/// Delete a venue
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    VenueService::new(&state.db).delete(id).await?;
    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// GET /api/venues/{id}/events
/// List the venue's events with computed statuses
pub async fn list_venue_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    VenueService::new(&state.db).get(id).await?;

    let service = EventService::new(&state.db, state.events_zone);
    let events = service
        .list(&crate::service::event::EventFilters {
            venue_id: Some(id),
            status: None,
            date: None,
        })
        .await?;
    Ok((StatusCode::OK, Json(events)))
}

/// GET /api/venues/{id}/promos
/// List the venue's promos
pub async fn list_venue_promos(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let promos = VenueService::new(&state.db).list_promos(id).await?;
    Ok((StatusCode::OK, Json(promos)))
}

/// GET /api/venues/{id}/stats
/// Venue-wide totals across all of its events
pub async fn get_venue_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let stats = service.venue_stats(id).await?;
    Ok((StatusCode::OK, Json(stats)))
}
