use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use entity::event;
use entity::sea_orm_active_enums::{EventStatus, PromoStatus};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        event::{ComputedStatusQuery, EventRepository, StoredEventFilters},
        venue::VenueRepository,
    },
    error::AppError,
    model::event::{
        CreateEventDto, CreateEventParams, EntryPriceInputDto, EntryPriceParams, EventDto,
        EventStatsDto, PaginatedEventsDto, PromoInputDto, PromoParams, SyncResultDto,
        UpdateEventDto, UpdateEventParams, VenueStatsDto,
    },
    service::status::{self, StatusSnapshot},
    util::parse,
};

/// Default sweep window when the caller does not bound it.
pub const DEFAULT_SWEEP_DAYS_BACK: i64 = 2;
pub const DEFAULT_SWEEP_DAYS_FORWARD: i64 = 2;

/// Hard cap on the sweep window. Events further out than a week cannot change
/// effective status over time, so scanning past this is wasted work.
const MAX_SWEEP_DAYS: i64 = 7;

/// Raw listing filters as received from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilters {
    pub venue_id: Option<Uuid>,
    pub status: Option<String>,
    pub date: Option<String>,
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    zone: Tz,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, zone: Tz) -> Self {
        Self { db, zone }
    }

    /// Lists events matching the filters, each carrying its effective status.
    ///
    /// A DRAFT or absent status filter is a plain stored-column query. LIVE
    /// and CLOSED are computed from the time window, so those go through the
    /// database-side computed-status predicate instead of loading and
    /// classifying every row here.
    ///
    /// # Arguments
    /// - `filters`: Optional venue, status, and date filters
    ///
    /// # Returns
    /// - `Ok(Vec<EventDto>)`: Matching events with active promo previews
    /// - `Err(AppError)`: Validation or database error
    pub async fn list(&self, filters: &EventFilters) -> Result<Vec<EventDto>, AppError> {
        let repo = EventRepository::new(self.db);
        let requested = filters
            .status
            .as_deref()
            .map(parse::normalize_status)
            .transpose()?;
        let date = filters.date.as_deref().map(parse::parse_date).transpose()?;
        let now = Utc::now();

        let events = match requested {
            Some(target) if target != EventStatus::Draft => {
                let snapshot = StatusSnapshot::take(self.zone, now);
                let query = ComputedStatusQuery {
                    venue_id: filters.venue_id,
                    date,
                    target,
                    skip: None,
                    take: None,
                };
                let ids = repo.ids_by_computed_status(&query, &snapshot).await?;
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                repo.find_by_ids_ordered(&ids).await?
            }
            stored => {
                repo.list(&StoredEventFilters {
                    venue_id: filters.venue_id,
                    status: stored,
                    date,
                })
                .await?
            }
        };

        self.reconcile_many(&events, now);
        self.serialize_listing(events, now).await
    }

    /// Lists one page of events with the pagination envelope.
    ///
    /// # Arguments
    /// - `page`: 1-based page number
    /// - `page_size`: Rows per page
    /// - `filters`: Optional venue, status, and date filters
    ///
    /// # Returns
    /// - `Ok(PaginatedEventsDto)`: Page data, total, and `has_more` flag
    /// - `Err(AppError)`: Validation or database error
    pub async fn list_paginated(
        &self,
        page: u64,
        page_size: u64,
        filters: &EventFilters,
    ) -> Result<PaginatedEventsDto, AppError> {
        let repo = EventRepository::new(self.db);
        let requested = filters
            .status
            .as_deref()
            .map(parse::normalize_status)
            .transpose()?;
        let date = filters.date.as_deref().map(parse::parse_date).transpose()?;

        let take = page_size.max(1);
        let page = page.max(1);
        let skip = (page - 1) * take;
        let now = Utc::now();

        let (events, total) = match requested {
            Some(target) if target != EventStatus::Draft => {
                let snapshot = StatusSnapshot::take(self.zone, now);
                let query = ComputedStatusQuery {
                    venue_id: filters.venue_id,
                    date,
                    target,
                    skip: Some(skip),
                    take: Some(take),
                };
                let total = repo.count_by_computed_status(&query, &snapshot).await?;
                let ids = repo.ids_by_computed_status(&query, &snapshot).await?;
                (repo.find_by_ids_ordered(&ids).await?, total)
            }
            stored => {
                let filters = StoredEventFilters {
                    venue_id: filters.venue_id,
                    status: stored,
                    date,
                };
                repo.list_page(&filters, skip, take).await?
            }
        };

        self.reconcile_many(&events, now);
        let has_more = skip + (events.len() as u64) < total;
        let data = self.serialize_listing(events, now).await?;

        Ok(PaginatedEventsDto {
            data,
            total,
            page,
            page_size: take,
            has_more,
        })
    }

    /// Gets one event with entry prices and promos.
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The event, status freshly computed
    /// - `Err(AppError::NotFound)`: No such event
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, id: Uuid) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);
        let (found, entry_prices, promos) = repo
            .get_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let now = Utc::now();
        self.reconcile_one(&found, now);

        let effective = status::effective_status(
            found.date,
            found.start_time,
            found.end_time,
            found.status,
            self.zone,
            now,
        );
        Ok(EventDto::from_parts(
            found,
            effective,
            Some(entry_prices),
            promos,
        ))
    }

    /// Creates an event.
    ///
    /// Stored status is forced to DRAFT regardless of what the payload asks
    /// for; LIVE and CLOSED only ever come out of the window computation. A
    /// supplied status string is still validated so typos are rejected rather
    /// than silently coerced.
    pub async fn create(&self, dto: CreateEventDto) -> Result<EventDto, AppError> {
        if let Some(requested) = dto.status.as_deref() {
            parse::normalize_status(requested)?;
        }
        let date = parse::parse_date(&dto.date)?;
        let start_time = dto.start_time.as_deref().map(parse::parse_time).transpose()?;
        let end_time = dto.end_time.as_deref().map(parse::parse_time).transpose()?;
        reject_inline_poster(dto.image.as_deref())?;

        VenueRepository::new(self.db)
            .get_by_id(dto.venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let entry_prices = dto
            .entry_prices
            .unwrap_or_default()
            .into_iter()
            .map(entry_price_params)
            .collect::<Result<Vec<_>, _>>()?;
        let promos = dto
            .promos
            .unwrap_or_default()
            .into_iter()
            .map(|input| promo_params(dto.venue_id, input))
            .collect::<Result<Vec<_>, _>>()?;

        let repo = EventRepository::new(self.db);
        let created = repo
            .create(CreateEventParams {
                venue_id: dto.venue_id,
                name: dto.name,
                description: dto.description,
                image: dto.image,
                date,
                start_time,
                end_time,
                status: EventStatus::Draft,
                entry_prices,
                promos,
            })
            .await?;

        self.get(created.id).await
    }

    /// Applies a partial update and returns the refreshed event.
    ///
    /// Only DRAFT is accepted as a status write; a provided entry price or
    /// promo list replaces the stored set wholesale.
    pub async fn update(&self, id: Uuid, dto: UpdateEventDto) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);
        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let status = match dto.status.as_deref() {
            Some(requested) => {
                let parsed = parse::normalize_status(requested)?;
                (parsed == EventStatus::Draft).then_some(parsed)
            }
            None => None,
        };
        let date = dto.date.as_deref().map(parse::parse_date).transpose()?;
        let start_time = dto.start_time.as_deref().map(parse::parse_time).transpose()?;
        let end_time = dto.end_time.as_deref().map(parse::parse_time).transpose()?;
        reject_inline_poster(dto.image.as_deref())?;

        let promo_venue_id = dto.venue_id.unwrap_or(existing.venue_id);
        let entry_prices = dto
            .entry_prices
            .map(|rules| {
                rules
                    .into_iter()
                    .map(entry_price_params)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let promos = dto
            .promos
            .map(|list| {
                list.into_iter()
                    .map(|input| promo_params(promo_venue_id, input))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        repo.update(
            id,
            UpdateEventParams {
                venue_id: dto.venue_id,
                name: dto.name,
                description: dto.description,
                image: dto.image,
                date,
                start_time,
                end_time,
                status,
                entry_prices,
                promos,
            },
        )
        .await?;

        self.get(id).await
    }

    /// Deletes an event and its dependent rows.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        repo.delete_with_dependents(id).await?;
        Ok(())
    }

    /// Aggregated totals for one event.
    pub async fn stats(&self, id: Uuid) -> Result<EventStatsDto, AppError> {
        let repo = EventRepository::new(self.db);
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let totals = repo.totals(id).await?;
        Ok(EventStatsDto {
            event_id: id,
            total_entries: totals.total_entries,
            total_bar: totals.total_bar,
            total_cloakroom: totals.total_cloakroom,
            total_tables: totals.total_tables,
            last_updated: Utc::now(),
        })
    }

    /// Venue-wide totals summed across all of the venue's events.
    pub async fn venue_stats(&self, venue_id: Uuid) -> Result<VenueStatsDto, AppError> {
        VenueRepository::new(self.db)
            .get_by_id(venue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        let repo = EventRepository::new(self.db);
        let mut events = Vec::new();
        for event_id in repo.ids_by_venue(venue_id).await? {
            events.push(self.stats(event_id).await?);
        }

        let mut stats = VenueStatsDto {
            venue_id,
            total_entries: 0,
            total_bar: 0.0,
            total_cloakroom: 0.0,
            total_tables: 0.0,
            events,
        };
        for event in &stats.events {
            stats.total_entries += event.total_entries;
            stats.total_bar += event.total_bar;
            stats.total_cloakroom += event.total_cloakroom;
            stats.total_tables += event.total_tables;
        }
        Ok(stats)
    }

    /// Runs the bulk status sweep over a bounded moving date window.
    ///
    /// Both window arms are clamped to 0..=7 days. Cross-midnight events
    /// still belong to their start date, so a couple of days in each
    /// direction covers every row whose status can change.
    ///
    /// # Arguments
    /// - `days_back`: Days before today to include (default 2)
    /// - `days_forward`: Days after today to include (default 2)
    ///
    /// # Returns
    /// - `Ok(SyncResultDto)`: Count of corrected rows
    /// - `Err(AppError)`: Database error
    pub async fn sync_statuses_now(
        &self,
        days_back: Option<i64>,
        days_forward: Option<i64>,
    ) -> Result<SyncResultDto, AppError> {
        let days_back = days_back
            .unwrap_or(DEFAULT_SWEEP_DAYS_BACK)
            .clamp(0, MAX_SWEEP_DAYS);
        let days_forward = days_forward
            .unwrap_or(DEFAULT_SWEEP_DAYS_FORWARD)
            .clamp(0, MAX_SWEEP_DAYS);

        let snapshot = StatusSnapshot::take(self.zone, Utc::now());
        let from = snapshot.local_date - Duration::days(days_back);
        let to = snapshot.local_date + Duration::days(days_forward);

        let updated = EventRepository::new(self.db)
            .sweep_statuses(&snapshot, from, to)
            .await?;

        Ok(SyncResultDto {
            success: true,
            updated,
        })
    }

    /// Best-effort write-back of a freshly computed status for each event.
    pub fn reconcile_many(&self, events: &[event::Model], now: DateTime<Utc>) {
        for event in events {
            self.reconcile_one(event, now);
        }
    }

    /// Compares an event's computed status with its stored one and, when they
    /// differ, persists the correction from a detached task.
    ///
    /// The read path never waits on the write and never sees its failure: the
    /// response already carries the freshly computed status, so the write-back
    /// only exists for consumers that read the table directly. The next read
    /// or sweep retries naturally.
    pub fn reconcile_one(&self, event: &event::Model, now: DateTime<Utc>) {
        if event.date.is_none() || event.start_time.is_none() || event.end_time.is_none() {
            return;
        }

        let effective = status::effective_status(
            event.date,
            event.start_time,
            event.end_time,
            event.status,
            self.zone,
            now,
        );
        if effective == event.status {
            return;
        }

        let db = self.db.clone();
        let id = event.id;
        tokio::spawn(async move {
            if let Err(err) = EventRepository::new(&db).update_status(id, effective).await {
                tracing::warn!("status write-back failed for event {}: {}", id, err);
            }
        });
    }

    /// Serializes listing rows, embedding each event's active promo preview.
    async fn serialize_listing(
        &self,
        events: Vec<event::Model>,
        now: DateTime<Utc>,
    ) -> Result<Vec<EventDto>, AppError> {
        let repo = EventRepository::new(self.db);
        let ids: Vec<Uuid> = events.iter().map(|event| event.id).collect();
        let mut promos = repo.active_promo_previews(&ids).await?;

        Ok(events
            .into_iter()
            .map(|event| {
                let effective = status::effective_status(
                    event.date,
                    event.start_time,
                    event.end_time,
                    event.status,
                    self.zone,
                    now,
                );
                let promos = promos.remove(&event.id).unwrap_or_default();
                EventDto::from_parts(event, effective, None, promos)
            })
            .collect())
    }
}

fn reject_inline_poster(image: Option<&str>) -> Result<(), AppError> {
    if image.is_some_and(parse::is_data_url_image) {
        return Err(AppError::BadRequest(
            "image must be a storage path, not an inline data URL".to_string(),
        ));
    }
    Ok(())
}

fn entry_price_params(input: EntryPriceInputDto) -> Result<EntryPriceParams, AppError> {
    Ok(EntryPriceParams {
        label: input.label,
        gender: input
            .gender
            .as_deref()
            .map(parse::normalize_gender)
            .transpose()?,
        start_time: input
            .start_time
            .as_deref()
            .map(parse::parse_time)
            .transpose()?,
        end_time: input
            .end_time
            .as_deref()
            .map(parse::parse_time)
            .transpose()?,
        price: parse::parse_price(input.price)?,
    })
}

fn promo_params(venue_id: Uuid, input: PromoInputDto) -> Result<PromoParams, AppError> {
    Ok(PromoParams {
        venue_id,
        event_id: None,
        title: input.title,
        description: input.description,
        discount_type: parse::normalize_discount_type(&input.discount_type)?,
        discount_value: input.discount_value.map(parse::parse_price).transpose()?,
        status: input
            .status
            .as_deref()
            .map(parse::normalize_promo_status)
            .transpose()?
            .unwrap_or(PromoStatus::Active),
    })
}
