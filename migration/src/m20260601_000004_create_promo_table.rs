use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260601_000001_create_venue_table::Venue, m20260601_000002_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promo::Table)
                    .if_not_exists()
                    .col(pk_uuid(Promo::Id))
                    .col(uuid(Promo::VenueId))
                    .col(uuid_null(Promo::EventId))
                    .col(string(Promo::Title))
                    .col(text_null(Promo::Description))
                    .col(string(Promo::DiscountType))
                    .col(decimal_null(Promo::DiscountValue))
                    .col(string(Promo::Status).default("active").not_null())
                    .col(
                        timestamp(Promo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promo_venue_id")
                            .from(Promo::Table, Promo::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promo_event_id")
                            .from(Promo::Table, Promo::EventId)
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
            .drop_table(Table::drop().table(Promo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Promo {
    #[sea_orm(iden = "promos")]
    Table,
    Id,
    VenueId,
    EventId,
    Title,
    Description,
    DiscountType,
    DiscountValue,
    Status,
    CreatedAt,
}
