use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000002_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTable::Table)
                    .if_not_exists()
                    .col(pk_uuid(EventTable::Id))
                    .col(uuid(EventTable::EventId))
                    .col(string(EventTable::Name))
                    .col(
                        timestamp(EventTable::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_table_event_id")
                            .from(EventTable::Table, EventTable::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTable {
    #[sea_orm(iden = "event_tables")]
    Table,
    Id,
    EventId,
    Name,
    CreatedAt,
}
