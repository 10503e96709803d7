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
        api::{ErrorDto, SuccessDto},
        promo::{CreatePromoDto, PromoDto, UpdatePromoDto},
    },
    service::promo::PromoService,
    state::AppState,
};

/// Tag for grouping promo endpoints in OpenAPI documentation
pub static PROMO_TAG: &str = "promo";

/// List all promos, newest first.
///
/// # Returns
/// - `200 OK` - All promos
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/promos",
    tag = PROMO_TAG,
    responses(
        (status = 200, description = "All promos", body = [PromoDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_promos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let promos = PromoService::new(&state.db).list().await?;
    Ok((StatusCode::OK, Json(promos)))
}

/// Get a single promo.
///
/// # Returns
/// - `200 OK` - The promo
/// - `404 Not Found` - No such promo
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/promos/{id}",
    tag = PROMO_TAG,
    params(
        ("id" = Uuid, Path, description = "Promo id")
    ),
    responses(
        (status = 200, description = "The promo", body = PromoDto),
        (status = 404, description = "Promo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_promo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let promo = PromoService::new(&state.db).get(id).await?;
    Ok((StatusCode::OK, Json(promo)))
}

/// List promos linked to an event.
#[utoipa::path(
    get,
    path = "/api/promos/by-event/{event_id}",
    tag = PROMO_TAG,
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Promos linked to the event", body = [PromoDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_promos_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let promos = PromoService::new(&state.db).list_by_event(event_id).await?;
    Ok((StatusCode::OK, Json(promos)))
}

/// List promos belonging to a venue.
#[utoipa::path(
    get,
    path = "/api/promos/by-venue/{venue_id}",
    tag = PROMO_TAG,
    params(
        ("venue_id" = Uuid, Path, description = "Venue id")
    ),
    responses(
        (status = 200, description = "Promos belonging to the venue", body = [PromoDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_promos_by_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let promos = PromoService::new(&state.db).list_by_venue(venue_id).await?;
    Ok((StatusCode::OK, Json(promos)))
}

/// Create a promo.
///
/// # Returns
/// - `201 Created` - The created promo
/// - `400 Bad Request` - Invalid discount type, status, or value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/promos",
    tag = PROMO_TAG,
    request_body = CreatePromoDto,
    responses(
        (status = 201, description = "Created promo", body = PromoDto),
        (status = 400, description = "Invalid promo data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_promo(
    State(state): State<AppState>,
    Json(dto): Json<CreatePromoDto>,
) -> Result<impl IntoResponse, AppError> {
    let promo = PromoService::new(&state.db).create(dto).await?;
    Ok((StatusCode::CREATED, Json(promo)))
}

/// Partially update a promo.
#[utoipa::path(
    patch,
    path = "/api/promos/{id}",
    tag = PROMO_TAG,
    params(
        ("id" = Uuid, Path, description = "Promo id")
    ),
    request_body = UpdatePromoDto,
    responses(
        (status = 200, description = "Updated promo", body = PromoDto),
        (status = 400, description = "Invalid promo data", body = ErrorDto),
        (status = 404, description = "Promo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_promo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdatePromoDto>,
) -> Result<impl IntoResponse, AppError> {
    let promo = PromoService::new(&state.db).update(id, dto).await?;
    Ok((StatusCode::OK, Json(promo)))
}

/// Delete a promo.
#[utoipa::path(
    delete,
    path = "/api/promos/{id}",
    tag = PROMO_TAG,
    params(
        ("id" = Uuid, Path, description = "Promo id")
    ),
    responses(
        (status = 200, description = "Promo deleted", body = SuccessDto),
        (status = 404, description = "Promo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_promo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    PromoService::new(&state.db).delete(id).await?;
    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
