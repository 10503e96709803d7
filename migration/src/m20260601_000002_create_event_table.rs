use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_venue_table::Venue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_uuid(Event::Id))
                    .col(uuid(Event::VenueId))
                    .col(string(Event::Name))
                    .col(text_null(Event::Description))
                    .col(string_null(Event::Image))
                    .col(date_null(Event::Date))
                    .col(time_null(Event::StartTime))
                    .col(time_null(Event::EndTime))
                    .col(string(Event::Status).default("DRAFT").not_null())
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_venue_id")
                            .from(Event::Table, Event::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    VenueId,
    Name,
    Description,
    Image,
    Date,
    StartTime,
    EndTime,
    Status,
    CreatedAt,
    UpdatedAt,
}
