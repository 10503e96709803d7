use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    model::staff::{RecordEntryDto, RecordSaleDto, RecordTableSaleDto},
    service::staff::StaffService,
    state::AppState,
};

#[derive(Serialize)]
pub struct RecordedDto {
    pub id: Uuid,
}

/// POST /api/staff/entries
/// Record one admitted guest
pub async fn record_entry(
    State(state): State<AppState>,
    Json(dto): Json<RecordEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = StaffService::new(&state.db).record_entry(dto).await?;
    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}

/// POST /api/staff/bar-sales
/// Record a bar sale
pub async fn record_bar_sale(
    State(state): State<AppState>,
    Json(dto): Json<RecordSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = StaffService::new(&state.db).record_bar_sale(dto).await?;
    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}

/// POST /api/staff/cloakroom-sales
/// Record a cloakroom sale
pub async fn record_cloakroom_sale(
    State(state): State<AppState>,
    Json(dto): Json<RecordSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = StaffService::new(&state.db)
        .record_cloakroom_sale(dto)
        .await?;
    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}

/// POST /api/staff/table-sales
/// Record a payment against an event table
pub async fn record_table_sale(
    State(state): State<AppState>,
    Json(dto): Json<RecordTableSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = StaffService::new(&state.db).record_table_sale(dto).await?;
    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}
