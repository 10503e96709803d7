use sea_orm::entity::prelude::*;

/// A payment recorded against an event table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "table_sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_table_id: Uuid,
    pub amount: Decimal,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_table::Entity",
        from = "Column::EventTableId",
        to = "super::event_table::Column::Id"
    )]
    EventTable,
}

impl Related<super::event_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventTable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
