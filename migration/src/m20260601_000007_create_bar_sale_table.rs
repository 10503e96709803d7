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
                    .table(BarSale::Table)
                    .if_not_exists()
                    .col(pk_uuid(BarSale::Id))
                    .col(uuid(BarSale::EventId))
                    .col(decimal(BarSale::Amount))
                    .col(
                        timestamp(BarSale::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bar_sale_event_id")
                            .from(BarSale::Table, BarSale::EventId)
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
            .drop_table(Table::drop().table(BarSale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BarSale {
    #[sea_orm(iden = "bar_sales")]
    Table,
    Id,
    EventId,
    Amount,
    CreatedAt,
}
