//! Promo factory for creating test promo entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{DiscountType, PromoStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test promos with customizable fields.
pub struct PromoFactory<'a> {
    db: &'a DatabaseConnection,
    venue_id: Uuid,
    event_id: Option<Uuid>,
    title: String,
    description: Option<String>,
    discount_type: DiscountType,
    discount_value: Option<Decimal>,
    status: PromoStatus,
}

impl<'a> PromoFactory<'a> {
    /// Creates a new PromoFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Promo {id}"` where id is auto-incremented
    /// - discount_type: `Percentage`
    /// - discount_value: `Some(10)`
    /// - status: `Active`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `venue_id` - Venue the promo belongs to
    pub fn new(db: &'a DatabaseConnection, venue_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            venue_id,
            event_id: None,
            title: format!("Promo {}", id),
            description: None,
            discount_type: DiscountType::Percentage,
            discount_value: Some(Decimal::new(10, 0)),
            status: PromoStatus::Active,
        }
    }

    /// Links the promo to an event.
    pub fn event_id(mut self, event_id: Option<Uuid>) -> Self {
        self.event_id = event_id;
        self
    }

    /// Sets the promo title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the discount type.
    pub fn discount_type(mut self, discount_type: DiscountType) -> Self {
        self.discount_type = discount_type;
        self
    }

    /// Sets the discount value.
    pub fn discount_value(mut self, discount_value: Option<Decimal>) -> Self {
        self.discount_value = discount_value;
        self
    }

    /// Sets the promo status.
    pub fn status(mut self, status: PromoStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the promo entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::promo::Model)` - Created promo entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::promo::Model, DbErr> {
        entity::promo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            venue_id: ActiveValue::Set(self.venue_id),
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            discount_type: ActiveValue::Set(self.discount_type),
            discount_value: ActiveValue::Set(self.discount_value),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active promo with default values for the specified venue.
pub async fn create_promo(
    db: &DatabaseConnection,
    venue_id: Uuid,
) -> Result<entity::promo::Model, DbErr> {
    PromoFactory::new(db, venue_id).build().await
}
