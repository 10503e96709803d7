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
                    .table(CloakroomSale::Table)
                    .if_not_exists()
                    .col(pk_uuid(CloakroomSale::Id))
                    .col(uuid(CloakroomSale::EventId))
                    .col(decimal(CloakroomSale::Amount))
                    .col(
                        timestamp(CloakroomSale::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cloakroom_sale_event_id")
                            .from(CloakroomSale::Table, CloakroomSale::EventId)
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
            .drop_table(Table::drop().table(CloakroomSale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CloakroomSale {
    #[sea_orm(iden = "cloakroom_sales")]
    Table,
    Id,
    EventId,
    Amount,
    CreatedAt,
}
