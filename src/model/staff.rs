use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body for recording an admitted guest.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordEntryDto {
    pub event_id: Uuid,
    /// M | F | ALTRO
    pub gender: Option<String>,
}

/// Body for recording a bar or cloakroom sale.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordSaleDto {
    pub event_id: Uuid,
    pub amount: f64,
}

/// Body for recording a payment against an event table.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordTableSaleDto {
    pub event_table_id: Uuid,
    pub amount: f64,
}
