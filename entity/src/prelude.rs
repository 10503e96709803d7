pub use super::bar_sale::Entity as BarSale;
pub use super::cloakroom_sale::Entity as CloakroomSale;
pub use super::entry::Entity as Entry;
pub use super::event::Entity as Event;
pub use super::event_entry_price::Entity as EventEntryPrice;
pub use super::event_table::Entity as EventTable;
pub use super::promo::Entity as Promo;
pub use super::table_sale::Entity as TableSale;
pub use super::venue::Entity as Venue;
