use std::collections::HashSet;

use super::*;
use test_utils::factory::event::EventFactory;
use uuid::Uuid;

/// Tests that the database-side computed-status predicate classifies exactly
/// like the in-application window calculator.
///
/// Builds a matrix of events around the reference instant (same-day windows,
/// overnight wraps, an equal start/end wrap, missing-time fallbacks in every
/// stored status) and compares, for each target status, the id set returned
/// by the predicate with the set obtained by running the calculator row by
/// row.
///
/// Expected: identical sets for DRAFT, LIVE, and CLOSED
#[tokio::test]
async fn matches_application_calculator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let windows = [
        (date(2024, 6, 13), Some(time(23, 0)), Some(time(5, 0))),
        (date(2024, 6, 14), Some(time(23, 0)), Some(time(5, 0))),
        (date(2024, 6, 15), Some(time(18, 0)), Some(time(22, 0))),
        (date(2024, 6, 15), Some(time(23, 0)), Some(time(5, 0))),
        (date(2024, 6, 15), Some(time(22, 0)), Some(time(23, 59))),
        (date(2024, 6, 15), Some(time(22, 0)), Some(time(22, 0))),
        (date(2024, 6, 16), Some(time(0, 0)), Some(time(6, 0))),
        (date(2024, 6, 16), Some(time(1, 0)), Some(time(3, 0))),
        (date(2024, 6, 16), Some(time(23, 0)), Some(time(4, 0))),
        (date(2024, 6, 17), Some(time(18, 0)), Some(time(23, 0))),
    ];

    let mut all = Vec::new();
    for (event_date, start, end) in windows {
        let event = EventFactory::new(db, venue.id)
            .date(Some(event_date))
            .start_time(start)
            .end_time(end)
            .build()
            .await?;
        all.push(event);
    }

    // Missing-time rows fall back to their stored status.
    for stored in [EventStatus::Draft, EventStatus::Live, EventStatus::Closed] {
        let event = EventFactory::new(db, venue.id)
            .date(Some(date(2024, 6, 15)))
            .start_time(None)
            .end_time(None)
            .status(stored)
            .build()
            .await?;
        all.push(event);
    }

    let now = fixed_now();
    let snapshot = StatusSnapshot::take(ZONE, now);
    let repo = EventRepository::new(db);

    for target in [EventStatus::Draft, EventStatus::Live, EventStatus::Closed] {
        let translated: HashSet<Uuid> = repo
            .ids_by_computed_status(
                &ComputedStatusQuery {
                    venue_id: None,
                    date: None,
                    target,
                    skip: None,
                    take: None,
                },
                &snapshot,
            )
            .await?
            .into_iter()
            .collect();

        let computed: HashSet<Uuid> = all
            .iter()
            .filter(|event| {
                status::effective_status(
                    event.date,
                    event.start_time,
                    event.end_time,
                    event.status,
                    ZONE,
                    now,
                ) == target
            })
            .map(|event| event.id)
            .collect();

        assert_eq!(translated, computed, "mismatch for target {:?}", target);
    }

    Ok(())
}

/// Tests that translated ids come back ordered by date, then start time.
///
/// Expected: Ok with ids in (date asc, start asc) order
#[tokio::test]
async fn orders_by_date_then_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    // All three are LIVE at the reference instant (2024-06-16 00:00 local).
    let later_date = EventFactory::new(db, venue.id)
        .date(Some(date(2024, 6, 16)))
        .start_time(Some(time(0, 0)))
        .end_time(Some(time(6, 0)))
        .build()
        .await?;
    let earlier_start = EventFactory::new(db, venue.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(Some(time(22, 0)))
        .end_time(Some(time(5, 0)))
        .build()
        .await?;
    let later_start = EventFactory::new(db, venue.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(Some(time(23, 0)))
        .end_time(Some(time(5, 0)))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let ids = repo
        .ids_by_computed_status(
            &ComputedStatusQuery {
                venue_id: None,
                date: None,
                target: EventStatus::Live,
                skip: None,
                take: None,
            },
            &StatusSnapshot::take(ZONE, fixed_now()),
        )
        .await?;

    assert_eq!(ids, vec![earlier_start.id, later_start.id, later_date.id]);

    Ok(())
}

/// Tests the missing-time fallback branch of the predicate.
///
/// Rows without both times cannot be classified by window, so they must
/// match on their stored status directly.
///
/// Expected: stored LIVE row matches target LIVE, stored DRAFT row does not
#[tokio::test]
async fn falls_back_to_stored_status_when_times_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let stored_live = EventFactory::new(db, venue.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(None)
        .end_time(None)
        .status(EventStatus::Live)
        .build()
        .await?;
    let _stored_draft = EventFactory::new(db, venue.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(Some(time(23, 0)))
        .end_time(None)
        .status(EventStatus::Draft)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let ids = repo
        .ids_by_computed_status(
            &ComputedStatusQuery {
                venue_id: None,
                date: None,
                target: EventStatus::Live,
                skip: None,
                take: None,
            },
            &StatusSnapshot::take(ZONE, fixed_now()),
        )
        .await?;

    assert_eq!(ids, vec![stored_live.id]);

    Ok(())
}

/// Tests venue and date filters compose with the computed-status predicate.
///
/// Expected: only rows of the requested venue and date are returned
#[tokio::test]
async fn filters_by_venue_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue_a = factory::create_venue(db).await?;
    let venue_b = factory::create_venue(db).await?;

    let in_a = EventFactory::new(db, venue_a.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(Some(time(23, 0)))
        .end_time(Some(time(5, 0)))
        .build()
        .await?;
    let _in_b = EventFactory::new(db, venue_b.id)
        .date(Some(date(2024, 6, 15)))
        .start_time(Some(time(23, 0)))
        .end_time(Some(time(5, 0)))
        .build()
        .await?;
    let _other_date = EventFactory::new(db, venue_a.id)
        .date(Some(date(2024, 6, 16)))
        .start_time(Some(time(0, 0)))
        .end_time(Some(time(6, 0)))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let ids = repo
        .ids_by_computed_status(
            &ComputedStatusQuery {
                venue_id: Some(venue_a.id),
                date: Some(date(2024, 6, 15)),
                target: EventStatus::Live,
                skip: None,
                take: None,
            },
            &StatusSnapshot::take(ZONE, fixed_now()),
        )
        .await?;

    assert_eq!(ids, vec![in_a.id]);

    Ok(())
}

/// Tests pagination of the id list together with the count shape.
///
/// Expected: count covers all matches, page respects skip/take and ordering
#[tokio::test]
async fn pages_with_skip_and_take() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    // Five already-closed same-day events on consecutive dates.
    let mut ids = Vec::new();
    for day in 10..15 {
        let event = EventFactory::new(db, venue.id)
            .date(Some(date(2024, 6, day)))
            .start_time(Some(time(18, 0)))
            .end_time(Some(time(22, 0)))
            .build()
            .await?;
        ids.push(event.id);
    }

    let snapshot = StatusSnapshot::take(ZONE, fixed_now());
    let repo = EventRepository::new(db);

    let query = ComputedStatusQuery {
        venue_id: None,
        date: None,
        target: EventStatus::Closed,
        skip: Some(2),
        take: Some(2),
    };

    let total = repo.count_by_computed_status(&query, &snapshot).await?;
    assert_eq!(total, 5);

    let page = repo.ids_by_computed_status(&query, &snapshot).await?;
    assert_eq!(page, vec![ids[2], ids[3]]);

    Ok(())
}
