//! Factories for the entry and sales ledger rows that feed event stats.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::Gender;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates one admitted-guest entry for the event.
pub async fn create_entry(
    db: &DatabaseConnection,
    event_id: Uuid,
    gender: Option<Gender>,
) -> Result<entity::entry::Model, DbErr> {
    entity::entry::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        event_id: ActiveValue::Set(event_id),
        gender: ActiveValue::Set(gender),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a bar sale for the event.
pub async fn create_bar_sale(
    db: &DatabaseConnection,
    event_id: Uuid,
    amount: Decimal,
) -> Result<entity::bar_sale::Model, DbErr> {
    entity::bar_sale::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        event_id: ActiveValue::Set(event_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a cloakroom sale for the event.
pub async fn create_cloakroom_sale(
    db: &DatabaseConnection,
    event_id: Uuid,
    amount: Decimal,
) -> Result<entity::cloakroom_sale::Model, DbErr> {
    entity::cloakroom_sale::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        event_id: ActiveValue::Set(event_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a table assigned to the event night.
pub async fn create_event_table(
    db: &DatabaseConnection,
    event_id: Uuid,
) -> Result<entity::event_table::Model, DbErr> {
    entity::event_table::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        event_id: ActiveValue::Set(event_id),
        name: ActiveValue::Set(format!("Table {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a payment against an event table.
pub async fn create_table_sale(
    db: &DatabaseConnection,
    event_table_id: Uuid,
    amount: Decimal,
) -> Result<entity::table_sale::Model, DbErr> {
    entity::table_sale::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        event_table_id: ActiveValue::Set(event_table_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
