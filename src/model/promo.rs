use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DiscountType, PromoStatus};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Promotional campaign as rendered on the wire.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PromoDto {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub event_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub discount_type: DiscountType,
    /// Decimal discount projected to a plain number; absent value renders as 0.
    pub discount_value: f64,
    #[schema(value_type = String)]
    pub status: PromoStatus,
    pub created_at: DateTime<Utc>,
}

impl PromoDto {
    /// Projects a promo row into its wire shape.
    ///
    /// # Arguments
    /// - `promo` - The promo entity from the database
    ///
    /// # Returns
    /// - `PromoDto` - Wire representation with decimal converted to a number
    pub fn from_entity(promo: entity::promo::Model) -> Self {
        Self {
            id: promo.id,
            venue_id: promo.venue_id,
            event_id: promo.event_id,
            title: promo.title,
            description: promo.description,
            discount_type: promo.discount_type,
            discount_value: promo
                .discount_value
                .and_then(|value| value.to_f64())
                .unwrap_or(0.0),
            status: promo.status,
            created_at: promo.created_at,
        }
    }
}

/// Body for creating a standalone promo.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePromoDto {
    pub venue_id: Uuid,
    pub event_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    /// percentage | fixed | free
    pub discount_type: String,
    pub discount_value: Option<f64>,
    /// active | inactive | expired; defaults to active
    pub status: Option<String>,
}

/// Body for partially updating a promo. Provided fields overwrite.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePromoDto {
    pub event_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<f64>,
    pub status: Option<String>,
}
