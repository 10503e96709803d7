use chrono::Utc;
use entity::sea_orm_active_enums::Gender;
use entity::{bar_sale, cloakroom_sale, entry, event_table, table_sale};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Repository for the staff-facing sales ledgers: entries at the door, bar
/// and cloakroom receipts, and payments against event tables. These rows feed
/// the event stats aggregates.
pub struct SalesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one admitted guest.
    pub async fn record_entry(
        &self,
        event_id: Uuid,
        gender: Option<Gender>,
    ) -> Result<entry::Model, DbErr> {
        entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            gender: ActiveValue::Set(gender),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Records a bar sale.
    pub async fn record_bar_sale(
        &self,
        event_id: Uuid,
        amount: Decimal,
    ) -> Result<bar_sale::Model, DbErr> {
        bar_sale::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Records a cloakroom sale.
    pub async fn record_cloakroom_sale(
        &self,
        event_id: Uuid,
        amount: Decimal,
    ) -> Result<cloakroom_sale::Model, DbErr> {
        cloakroom_sale::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Records a payment against an event table.
    pub async fn record_table_sale(
        &self,
        event_table_id: Uuid,
        amount: Decimal,
    ) -> Result<table_sale::Model, DbErr> {
        table_sale::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_table_id: ActiveValue::Set(event_table_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets an event table by id.
    pub async fn get_event_table(&self, id: Uuid) -> Result<Option<event_table::Model>, DbErr> {
        entity::prelude::EventTable::find_by_id(id)
            .one(self.db)
            .await
    }
}
