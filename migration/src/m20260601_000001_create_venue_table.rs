use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_uuid(Venue::Id))
                    .col(string(Venue::Name))
                    .col(string_null(Venue::City))
                    .col(double_null(Venue::RadiusGeofence))
                    .col(
                        timestamp(Venue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    #[sea_orm(iden = "venues")]
    Table,
    Id,
    Name,
    City,
    RadiusGeofence,
    CreatedAt,
}
