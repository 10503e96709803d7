use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Gender;

/// Entry price rule for an event, optionally scoped to a gender and a
/// time-of-day window. The full set is replaced wholesale on event update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_entry_prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_id: Uuid,
    pub label: Option<String>,
    pub gender: Option<Gender>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub price: Decimal,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
