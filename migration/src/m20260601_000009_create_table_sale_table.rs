use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000005_create_event_tables_table::EventTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TableSale::Table)
                    .if_not_exists()
                    .col(pk_uuid(TableSale::Id))
                    .col(uuid(TableSale::EventTableId))
                    .col(decimal(TableSale::Amount))
                    .col(
                        timestamp(TableSale::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_sale_event_table_id")
                            .from(TableSale::Table, TableSale::EventTableId)
                            .to(EventTable::Table, EventTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TableSale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TableSale {
    #[sea_orm(iden = "table_sales")]
    Table,
    Id,
    EventTableId,
    Amount,
    CreatedAt,
}
