pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_venue_table;
mod m20260601_000002_create_event_table;
mod m20260601_000003_create_event_entry_price_table;
mod m20260601_000004_create_promo_table;
mod m20260601_000005_create_event_tables_table;
mod m20260601_000006_create_entry_table;
mod m20260601_000007_create_bar_sale_table;
mod m20260601_000008_create_cloakroom_sale_table;
mod m20260601_000009_create_table_sale_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_venue_table::Migration),
            Box::new(m20260601_000002_create_event_table::Migration),
            Box::new(m20260601_000003_create_event_entry_price_table::Migration),
            Box::new(m20260601_000004_create_promo_table::Migration),
            Box::new(m20260601_000005_create_event_tables_table::Migration),
            Box::new(m20260601_000006_create_entry_table::Migration),
            Box::new(m20260601_000007_create_bar_sale_table::Migration),
            Box::new(m20260601_000008_create_cloakroom_sale_table::Migration),
            Box::new(m20260601_000009_create_table_sale_table::Migration),
        ]
    }
}
