//! Entry price factory for creating test entry price rules.

use chrono::{NaiveTime, Utc};
use entity::sea_orm_active_enums::Gender;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test entry price rules with customizable fields.
pub struct EntryPriceFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: Uuid,
    label: Option<String>,
    gender: Option<Gender>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    price: Decimal,
}

impl<'a> EntryPriceFactory<'a> {
    /// Creates a new EntryPriceFactory with default values.
    ///
    /// Defaults:
    /// - label: `Some("Lista")`
    /// - price: `15`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the rule belongs to
    pub fn new(db: &'a DatabaseConnection, event_id: Uuid) -> Self {
        Self {
            db,
            event_id,
            label: Some("Lista".to_string()),
            gender: None,
            start_time: None,
            end_time: None,
            price: Decimal::new(15, 0),
        }
    }

    /// Sets the rule label.
    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Sets the gender scope.
    pub fn gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the time window.
    pub fn window(mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the entry price entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event_entry_price::Model)` - Created entry price entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event_entry_price::Model, DbErr> {
        entity::event_entry_price::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(self.event_id),
            label: ActiveValue::Set(self.label),
            gender: ActiveValue::Set(self.gender),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entry price rule with default values for the specified event.
pub async fn create_entry_price(
    db: &DatabaseConnection,
    event_id: Uuid,
) -> Result<entity::event_entry_price::Model, DbErr> {
    EntryPriceFactory::new(db, event_id).build().await
}
