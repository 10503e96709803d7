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
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(pk_uuid(Entry::Id))
                    .col(uuid(Entry::EventId))
                    .col(string_null(Entry::Gender))
                    .col(
                        timestamp(Entry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_event_id")
                            .from(Entry::Table, Entry::EventId)
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
            .drop_table(Table::drop().table(Entry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entry {
    #[sea_orm(iden = "entries")]
    Table,
    Id,
    EventId,
    Gender,
    CreatedAt,
}
