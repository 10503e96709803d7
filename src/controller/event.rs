use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::cron::assert_cron_auth,
    model::{
        api::{ErrorDto, SuccessDto},
        event::{
            CreateEventDto, EventDto, EventStatsDto, PaginatedEventsDto, SyncResultDto,
            UpdateEventDto,
        },
    },
    service::event::{EventFilters, EventService},
    state::AppState,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct ListEventsQuery {
    pub venue_id: Option<Uuid>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
}

fn default_page_size() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct SyncStatusQuery {
    pub token: Option<String>,
    #[serde(rename = "daysBack")]
    pub days_back: Option<i64>,
    #[serde(rename = "daysForward")]
    pub days_forward: Option<i64>,
}

/// List events, optionally filtered and paginated.
///
/// Every returned event carries its computed effective status. Filtering by
/// LIVE or CLOSED is resolved database-side from the time window; filtering
/// by DRAFT (or not at all) is a stored-column query. Supplying `page` or
/// `pageSize` switches the response to the pagination envelope.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Filters plus optional pagination parameters
///
/// # Returns
/// - `200 OK` - Array of events, or the pagination envelope
/// - `400 Bad Request` - Malformed status or date filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("venue_id" = Option<Uuid>, Query, description = "Restrict to one venue"),
        ("status" = Option<String>, Query, description = "DRAFT | LIVE | CLOSED"),
        ("date" = Option<String>, Query, description = "Calendar date YYYY-MM-DD"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("pageSize" = Option<u64>, Query, description = "Rows per page")
    ),
    responses(
        (status = 200, description = "Matching events", body = [EventDto]),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let filters = EventFilters {
        venue_id: query.venue_id,
        status: query.status,
        date: query.date,
    };

    if query.page.is_some() || query.page_size.is_some() {
        let page = query.page.unwrap_or(1);
        let page_size = query.page_size.unwrap_or_else(default_page_size);
        let result = service.list_paginated(page, page_size, &filters).await?;
        return Ok((StatusCode::OK, Json(result)).into_response());
    }

    let events = service.list(&filters).await?;
    Ok((StatusCode::OK, Json(events)).into_response())
}

/// Get a single event with entry prices and promos.
///
/// # Returns
/// - `200 OK` - The event, status freshly computed
/// - `404 Not Found` - No such event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let event = service.get(id).await?;
    Ok((StatusCode::OK, Json(event)))
}

/// Get aggregated entry and sales totals for an event.
///
/// # Returns
/// - `200 OK` - Totals for entries, bar, cloakroom, and tables
/// - `404 Not Found` - No such event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{id}/stats",
    tag = EVENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event totals", body = EventStatsDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let stats = service.stats(id).await?;
    Ok((StatusCode::OK, Json(stats)))
}

/// Create an event.
///
/// Stored status always lands as DRAFT; LIVE and CLOSED are computed from the
/// event's time window and never accepted from clients.
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Malformed date, time, enum value, or inline image
/// - `404 Not Found` - Referenced venue does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(dto): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let event = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Partially update an event.
///
/// Provided fields overwrite; provided entry price and promo lists replace
/// the stored sets wholesale. Only DRAFT is honored as a status write.
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Malformed field
/// - `404 Not Found` - No such event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    let event = service.update(id, dto).await?;
    Ok((StatusCode::OK, Json(event)))
}

/// Delete an event and its dependent rows.
///
/// # Returns
/// - `200 OK` - `{ "success": true }`
/// - `404 Not Found` - No such event
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event deleted", body = SuccessDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, state.events_zone);
    service.delete(id).await?;
    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Trigger the bulk status sweep.
///
/// Intended for an external scheduler hitting the API with the shared cron
/// secret (header `x-cron-secret` or `token` query parameter); keeps stored
/// statuses aligned even with no read traffic. The scanned window is clamped
/// to at most 7 days in each direction.
///
/// # Returns
/// - `200 OK` - `{ success, updated }`
/// - `403 Forbidden` - Missing or wrong cron secret
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/sync-status",
    tag = EVENT_TAG,
    params(
        ("token" = Option<String>, Query, description = "Cron secret"),
        ("daysBack" = Option<i64>, Query, description = "Days before today to scan (max 7)"),
        ("daysForward" = Option<i64>, Query, description = "Days after today to scan (max 7)")
    ),
    responses(
        (status = 200, description = "Sweep result", body = SyncResultDto),
        (status = 403, description = "Missing or invalid cron secret", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_event_statuses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SyncStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    assert_cron_auth(&headers, query.token.as_deref(), state.cron_secret.as_deref())?;

    let service = EventService::new(&state.db, state.events_zone);
    let result = service
        .sync_statuses_now(query.days_back, query.days_forward)
        .await?;
    Ok((StatusCode::OK, Json(result)))
}
