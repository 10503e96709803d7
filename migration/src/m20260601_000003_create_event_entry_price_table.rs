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
                    .table(EventEntryPrice::Table)
                    .if_not_exists()
                    .col(pk_uuid(EventEntryPrice::Id))
                    .col(uuid(EventEntryPrice::EventId))
                    .col(string_null(EventEntryPrice::Label))
                    .col(string_null(EventEntryPrice::Gender))
                    .col(time_null(EventEntryPrice::StartTime))
                    .col(time_null(EventEntryPrice::EndTime))
                    .col(decimal(EventEntryPrice::Price))
                    .col(
                        timestamp(EventEntryPrice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_entry_price_event_id")
                            .from(EventEntryPrice::Table, EventEntryPrice::EventId)
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
            .drop_table(Table::drop().table(EventEntryPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventEntryPrice {
    #[sea_orm(iden = "event_entry_prices")]
    Table,
    Id,
    EventId,
    Label,
    Gender,
    StartTime,
    EndTime,
    Price,
    CreatedAt,
}
