use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventStatus;

/// An event night at a venue.
///
/// `date` is a plain calendar date and `start_time`/`end_time` are plain
/// wall-clock times; all three are interpreted in the configured venue-local
/// timezone, never in UTC. `status` is authoritative only for `Draft`: `Live`
/// and `Closed` are recomputed from the time window on every read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub venue_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Opaque storage path of the poster image; never inline image bytes.
    pub image: Option<String>,
    pub date: Option<Date>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub status: EventStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id"
    )]
    Venue,
    #[sea_orm(has_many = "super::event_entry_price::Entity")]
    EventEntryPrice,
    #[sea_orm(has_many = "super::promo::Entity")]
    Promo,
    #[sea_orm(has_many = "super::event_table::Entity")]
    EventTable,
    #[sea_orm(has_many = "super::entry::Entity")]
    Entry,
    #[sea_orm(has_many = "super::bar_sale::Entity")]
    BarSale,
    #[sea_orm(has_many = "super::cloakroom_sale::Entity")]
    CloakroomSale,
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::event_entry_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventEntryPrice.def()
    }
}

impl Related<super::promo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Promo.def()
    }
}

impl Related<super::event_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventTable.def()
    }
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl Related<super::bar_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarSale.def()
    }
}

impl Related<super::cloakroom_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CloakroomSale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
