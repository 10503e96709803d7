use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{EventStatus, PromoStatus};
use entity::{
    bar_sale, cloakroom_sale, entry, event, event_entry_price, event_table, promo, table_sale,
};
use sea_orm::{
    sea_query::{Alias, Condition, Expr, ExprTrait, Func, NullOrdering, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    model::event::{CreateEventParams, EntryPriceParams, PromoParams, UpdateEventParams},
    service::status::StatusSnapshot,
};

/// Listings embed at most this many active promos per event.
const ACTIVE_PROMO_PREVIEW_LIMIT: usize = 3;

/// Filters applied directly against stored columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredEventFilters {
    pub venue_id: Option<Uuid>,
    pub status: Option<EventStatus>,
    pub date: Option<NaiveDate>,
}

/// Parameters for a computed-status query.
///
/// `skip`/`take` bound the id page; both absent returns every match.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStatusQuery {
    pub venue_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub target: EventStatus,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// Aggregated totals for a single event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTotals {
    pub total_entries: u64,
    pub total_bar: f64,
    pub total_cloakroom: f64,
    pub total_tables: f64,
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event together with its entry price rules and promos.
    ///
    /// # Arguments
    /// - `params`: Validated event fields and nested rows
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateEventParams) -> Result<event::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let created = event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            venue_id: ActiveValue::Set(params.venue_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            date: ActiveValue::Set(Some(params.date)),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        insert_entry_prices(&txn, created.id, params.entry_prices).await?;
        insert_promos(&txn, created.id, params.promos).await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Gets an event by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets an event with its entry price rules and promos.
    ///
    /// # Returns
    /// - `Ok(Some((event, entry_prices, promos)))`: Event with relations loaded
    /// - `Ok(None)`: Event not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_relations(
        &self,
        id: Uuid,
    ) -> Result<
        Option<(
            event::Model,
            Vec<event_entry_price::Model>,
            Vec<promo::Model>,
        )>,
        DbErr,
    > {
        let Some(found) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entry_prices = entity::prelude::EventEntryPrice::find()
            .filter(event_entry_price::Column::EventId.eq(id))
            .order_by_asc(event_entry_price::Column::CreatedAt)
            .all(self.db)
            .await?;

        let promos = entity::prelude::Promo::find()
            .filter(promo::Column::EventId.eq(id))
            .all(self.db)
            .await?;

        Ok(Some((found, entry_prices, promos)))
    }

    /// Lists events matching stored-column filters, ordered by
    /// (date asc, start time asc, nulls last).
    pub async fn list(&self, filters: &StoredEventFilters) -> Result<Vec<event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(stored_filters_condition(filters))
            .order_by_asc(event::Column::Date)
            .order_by_with_nulls(event::Column::StartTime, Order::Asc, NullOrdering::Last)
            .all(self.db)
            .await
    }

    /// Lists one page of events matching stored-column filters plus the total count.
    ///
    /// # Arguments
    /// - `filters`: Stored-column filters
    /// - `skip`: Rows to skip
    /// - `take`: Page size
    ///
    /// # Returns
    /// - `Ok((events, total))`: Page of events and overall match count
    /// - `Err(DbErr)`: Database error
    pub async fn list_page(
        &self,
        filters: &StoredEventFilters,
        skip: u64,
        take: u64,
    ) -> Result<(Vec<event::Model>, u64), DbErr> {
        let total = entity::prelude::Event::find()
            .filter(stored_filters_condition(filters))
            .count(self.db)
            .await?;

        let events = entity::prelude::Event::find()
            .filter(stored_filters_condition(filters))
            .order_by_asc(event::Column::Date)
            .order_by_with_nulls(event::Column::StartTime, Order::Asc, NullOrdering::Last)
            .offset(skip)
            .limit(take)
            .all(self.db)
            .await?;

        Ok((events, total))
    }

    /// Ids of events whose computed status equals the target, evaluated
    /// database-side against one wall-clock snapshot.
    ///
    /// Ordered by (date asc, start time asc, nulls last); `skip`/`take` bound
    /// the page when `take` is present.
    pub async fn ids_by_computed_status(
        &self,
        params: &ComputedStatusQuery,
        snapshot: &StatusSnapshot,
    ) -> Result<Vec<Uuid>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .select_only()
            .column(event::Column::Id)
            .filter(
                Condition::all()
                    .add_option(params.venue_id.map(|id| event::Column::VenueId.eq(id)))
                    .add_option(params.date.map(|date| event::Column::Date.eq(date))),
            )
            .filter(computed_status_condition(params.target, snapshot))
            .order_by_asc(event::Column::Date)
            .order_by_with_nulls(event::Column::StartTime, Order::Asc, NullOrdering::Last);

        if let Some(take) = params.take {
            query = query.offset(params.skip.unwrap_or(0)).limit(take);
        }

        query.into_tuple::<Uuid>().all(self.db).await
    }

    /// Cardinality of the computed-status match set; pairs with
    /// [`Self::ids_by_computed_status`] for pagination totals.
    pub async fn count_by_computed_status(
        &self,
        params: &ComputedStatusQuery,
        snapshot: &StatusSnapshot,
    ) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(
                Condition::all()
                    .add_option(params.venue_id.map(|id| event::Column::VenueId.eq(id)))
                    .add_option(params.date.map(|date| event::Column::Date.eq(date))),
            )
            .filter(computed_status_condition(params.target, snapshot))
            .count(self.db)
            .await
    }

    /// Fetches events by id, returned in the order of `ids`.
    pub async fn find_by_ids_ordered(&self, ids: &[Uuid]) -> Result<Vec<event::Model>, DbErr> {
        let rows = entity::prelude::Event::find()
            .filter(event::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut by_id: HashMap<Uuid, event::Model> =
            rows.into_iter().map(|row| (row.id, row)).collect();
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Active promos for a set of events, newest first, at most
    /// three per event, keyed by event id.
    pub async fn active_promo_previews(
        &self,
        event_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<promo::Model>>, DbErr> {
        let promos = entity::prelude::Promo::find()
            .filter(promo::Column::EventId.is_in(event_ids.iter().copied()))
            .filter(promo::Column::Status.eq(PromoStatus::Active))
            .order_by_desc(promo::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut by_event: HashMap<Uuid, Vec<promo::Model>> = HashMap::new();
        for promo in promos {
            if let Some(event_id) = promo.event_id {
                let bucket = by_event.entry(event_id).or_default();
                if bucket.len() < ACTIVE_PROMO_PREVIEW_LIMIT {
                    bucket.push(promo);
                }
            }
        }
        Ok(by_event)
    }

    /// Applies a partial update; provided entry price and promo lists replace
    /// the stored sets wholesale, all inside one transaction.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated event
    /// - `Err(DbErr)`: Event missing or database error
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateEventParams,
    ) -> Result<event::Model, DbErr> {
        let txn = self.db.begin().await?;

        let current = entity::prelude::Event::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active: event::ActiveModel = current.into();
        if let Some(venue_id) = params.venue_id {
            active.venue_id = ActiveValue::Set(venue_id);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(Some(image));
        }
        if let Some(date) = params.date {
            active.date = ActiveValue::Set(Some(date));
        }
        if let Some(start_time) = params.start_time {
            active.start_time = ActiveValue::Set(Some(start_time));
        }
        if let Some(end_time) = params.end_time {
            active.end_time = ActiveValue::Set(Some(end_time));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(&txn).await?;

        if let Some(rules) = params.entry_prices {
            entity::prelude::EventEntryPrice::delete_many()
                .filter(event_entry_price::Column::EventId.eq(id))
                .exec(&txn)
                .await?;
            insert_entry_prices(&txn, id, rules).await?;
        }

        if let Some(promos) = params.promos {
            entity::prelude::Promo::delete_many()
                .filter(promo::Column::EventId.eq(id))
                .exec(&txn)
                .await?;
            insert_promos(&txn, id, promos).await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes an event and every dependent row in one transaction.
    pub async fn delete_with_dependents(&self, id: Uuid) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let table_ids: Vec<Uuid> = entity::prelude::EventTable::find()
            .select_only()
            .column(event_table::Column::Id)
            .filter(event_table::Column::EventId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !table_ids.is_empty() {
            entity::prelude::TableSale::delete_many()
                .filter(table_sale::Column::EventTableId.is_in(table_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Entry::delete_many()
            .filter(entry::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::BarSale::delete_many()
            .filter(bar_sale::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::CloakroomSale::delete_many()
            .filter(cloakroom_sale::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::EventTable::delete_many()
            .filter(event_table::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::EventEntryPrice::delete_many()
            .filter(event_entry_price::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Promo::delete_many()
            .filter(promo::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Event::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Writes a corrected stored status for a single event.
    pub async fn update_status(&self, id: Uuid, status: EventStatus) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .col_expr(event::Column::Status, Expr::val(status).into())
            .filter(event::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Bulk-corrects stored statuses for events dated within `[from, to]`.
    ///
    /// One conditional UPDATE: rows with both times present whose stored
    /// status differs from the computed one get the computed value; rows
    /// already in agreement are untouched, which is what makes an immediate
    /// re-run a no-op.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of corrected rows
    /// - `Err(DbErr)`: Database error
    pub async fn sweep_statuses(
        &self,
        snapshot: &StatusSnapshot,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<u64, DbErr> {
        let computed: SimpleExpr = Expr::case(
            window_matches(EventStatus::Draft, snapshot),
            Expr::val(EventStatus::Draft),
        )
        .case(
            window_matches(EventStatus::Closed, snapshot),
            Expr::val(EventStatus::Closed),
        )
        .finally(Expr::val(EventStatus::Live))
        .into();

        let result = entity::prelude::Event::update_many()
            .col_expr(event::Column::Status, computed.clone())
            .filter(window_inputs_present())
            .filter(event::Column::Date.gte(from))
            .filter(event::Column::Date.lte(to))
            .filter(Expr::col(event::Column::Status).ne(computed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ids of all events belonging to a venue.
    pub async fn ids_by_venue(&self, venue_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Event::find()
            .select_only()
            .column(event::Column::Id)
            .filter(event::Column::VenueId.eq(venue_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Aggregated entry and sales totals for an event.
    pub async fn totals(&self, event_id: Uuid) -> Result<EventTotals, DbErr> {
        let total_entries = entity::prelude::Entry::find()
            .filter(entry::Column::EventId.eq(event_id))
            .count(self.db)
            .await?;

        let total_bar: Option<f64> = entity::prelude::BarSale::find()
            .select_only()
            .column_as(bar_sale::Column::Amount.sum(), "total")
            .filter(bar_sale::Column::EventId.eq(event_id))
            .into_tuple()
            .one(self.db)
            .await?
            .flatten();

        let total_cloakroom: Option<f64> = entity::prelude::CloakroomSale::find()
            .select_only()
            .column_as(cloakroom_sale::Column::Amount.sum(), "total")
            .filter(cloakroom_sale::Column::EventId.eq(event_id))
            .into_tuple()
            .one(self.db)
            .await?
            .flatten();

        let total_tables: Option<f64> = entity::prelude::TableSale::find()
            .join(JoinType::InnerJoin, table_sale::Relation::EventTable.def())
            .select_only()
            .column_as(table_sale::Column::Amount.sum(), "total")
            .filter(event_table::Column::EventId.eq(event_id))
            .into_tuple()
            .one(self.db)
            .await?
            .flatten();

        Ok(EventTotals {
            total_entries,
            total_bar: total_bar.unwrap_or(0.0),
            total_cloakroom: total_cloakroom.unwrap_or(0.0),
            total_tables: total_tables.unwrap_or(0.0),
        })
    }
}

/// Predicate matching rows whose computed status equals `target` at the
/// snapshot instant.
///
/// Mirrors `service::status::effective_status` branch for branch: rows
/// missing any window input fall back to a stored-status comparison, all
/// others are classified by their window against the snapshot's wall clock.
pub fn computed_status_condition(target: EventStatus, snapshot: &StatusSnapshot) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(window_inputs_missing())
                .add(event::Column::Status.eq(target)),
        )
        .add(
            Condition::all()
                .add(window_inputs_present())
                .add(window_matches(target, snapshot)),
        )
}

fn stored_filters_condition(filters: &StoredEventFilters) -> Condition {
    Condition::all()
        .add_option(filters.venue_id.map(|id| event::Column::VenueId.eq(id)))
        .add_option(filters.status.map(|status| event::Column::Status.eq(status)))
        .add_option(filters.date.map(|date| event::Column::Date.eq(date)))
}

fn window_inputs_present() -> Condition {
    Condition::all()
        .add(event::Column::Date.is_not_null())
        .add(event::Column::StartTime.is_not_null())
        .add(event::Column::EndTime.is_not_null())
}

fn window_inputs_missing() -> Condition {
    Condition::any()
        .add(event::Column::Date.is_null())
        .add(event::Column::StartTime.is_null())
        .add(event::Column::EndTime.is_null())
}

/// Window classification for rows whose date and times are all present.
fn window_matches(target: EventStatus, snapshot: &StatusSnapshot) -> Condition {
    match target {
        EventStatus::Draft => not_started(snapshot),
        EventStatus::Live => Condition::all()
            .add(not_started(snapshot).not())
            .add(ended(snapshot).not()),
        EventStatus::Closed => ended(snapshot),
    }
}

/// `(date, start) > (local_date, local_minute)` — the window has not opened.
fn not_started(snapshot: &StatusSnapshot) -> Condition {
    Condition::any()
        .add(event::Column::Date.gt(snapshot.local_date))
        .add(
            Condition::all()
                .add(event::Column::Date.eq(snapshot.local_date))
                .add(minute_of(event::Column::StartTime).gt(snapshot.local_minute.clone())),
        )
}

/// The window has closed. An end at or before the start wraps past midnight,
/// moving the end boundary onto the day after the event's date; that branch
/// therefore compares against the snapshot's previous day.
fn ended(snapshot: &StatusSnapshot) -> Condition {
    let same_day_end = Condition::any()
        .add(event::Column::Date.lt(snapshot.local_date))
        .add(
            Condition::all()
                .add(event::Column::Date.eq(snapshot.local_date))
                .add(minute_of(event::Column::EndTime).lte(snapshot.local_minute.clone())),
        );

    let wrapped_end = Condition::any()
        .add(event::Column::Date.lt(snapshot.prev_date))
        .add(
            Condition::all()
                .add(event::Column::Date.eq(snapshot.prev_date))
                .add(minute_of(event::Column::EndTime).lte(snapshot.local_minute.clone())),
        );

    Condition::any()
        .add(
            Condition::all()
                .add(minute_of(event::Column::EndTime).gt(minute_of(event::Column::StartTime)))
                .add(same_day_end),
        )
        .add(
            Condition::all()
                .add(minute_of(event::Column::EndTime).lte(minute_of(event::Column::StartTime)))
                .add(wrapped_end),
        )
}

/// `substr(col, 1, 5)` — the `HH:MM` prefix of a stored time, pinning
/// comparisons to the calculator's minute precision even when seconds were
/// stored.
fn minute_of(column: event::Column) -> SimpleExpr {
    Func::cust(Alias::new("substr"))
        .arg(Expr::col(column))
        .arg(1)
        .arg(5)
        .into()
}

async fn insert_entry_prices<C: ConnectionTrait>(
    conn: &C,
    event_id: Uuid,
    rules: Vec<EntryPriceParams>,
) -> Result<(), DbErr> {
    for rule in rules {
        event_entry_price::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            label: ActiveValue::Set(rule.label),
            gender: ActiveValue::Set(rule.gender),
            start_time: ActiveValue::Set(rule.start_time),
            end_time: ActiveValue::Set(rule.end_time),
            price: ActiveValue::Set(rule.price),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}

async fn insert_promos<C: ConnectionTrait>(
    conn: &C,
    event_id: Uuid,
    promos: Vec<PromoParams>,
) -> Result<(), DbErr> {
    for promo in promos {
        promo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            venue_id: ActiveValue::Set(promo.venue_id),
            event_id: ActiveValue::Set(Some(event_id)),
            title: ActiveValue::Set(promo.title),
            description: ActiveValue::Set(promo.description),
            discount_type: ActiveValue::Set(promo.discount_type),
            discount_value: ActiveValue::Set(promo.discount_value),
            status: ActiveValue::Set(promo.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}
