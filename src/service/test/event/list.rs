use super::*;
use test_utils::factory::event::EventFactory;
use test_utils::factory::promo::PromoFactory;

/// Tests that a LIVE status filter returns window-live events plus
/// missing-time rows stored as LIVE, and that the DTO carries the computed
/// status and normalized date/time strings.
///
/// Expected: exactly the live rows, formatted per the wire contract
#[tokio::test]
async fn lists_live_events_with_computed_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    let (window_date, start, end) = live_window();
    let running = EventFactory::new(db, venue.id)
        .date(Some(window_date))
        .start_time(Some(start))
        .end_time(Some(end))
        .status(EventStatus::Draft)
        .build()
        .await
        .map_err(AppError::from)?;

    let stored_live_no_times = EventFactory::new(db, venue.id)
        .date(Some(local_date_offset(0)))
        .start_time(None)
        .end_time(None)
        .status(EventStatus::Live)
        .build()
        .await
        .map_err(AppError::from)?;

    // Two days out: DRAFT by window, must not appear.
    EventFactory::new(db, venue.id)
        .date(Some(local_date_offset(2)))
        .build()
        .await
        .map_err(AppError::from)?;

    let service = EventService::new(db, ZONE);
    let listed = service
        .list(&EventFilters {
            venue_id: None,
            status: Some("live".to_string()),
            date: None,
        })
        .await?;

    let mut ids: Vec<_> = listed.iter().map(|event| event.id).collect();
    ids.sort_unstable();
    let mut expected = vec![running.id, stored_live_no_times.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    let running_dto = listed
        .iter()
        .find(|event| event.id == running.id)
        .unwrap();
    assert_eq!(running_dto.status, EventStatus::Live);
    assert_eq!(
        running_dto.date.as_deref(),
        Some(window_date.format("%Y-%m-%d").to_string().as_str())
    );
    assert_eq!(
        running_dto.start_time.as_deref(),
        Some(start.format("%H:%M").to_string().as_str())
    );
    // Listings omit entry prices.
    assert!(running_dto.entry_prices.is_none());

    Ok(())
}

/// Tests that an invalid status filter is rejected up front.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_status_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db, ZONE);
    let result = service
        .list(&EventFilters {
            venue_id: None,
            status: Some("SOON".to_string()),
            date: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the at-most-three active promo preview on listing responses.
///
/// Expected: three active promos embedded, expired ones excluded
#[tokio::test]
async fn embeds_active_promo_preview() -> Result<(), AppError> {
    use entity::sea_orm_active_enums::PromoStatus;

    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, event) = factory::helpers::create_event_with_venue(db)
        .await
        .map_err(AppError::from)?;

    for _ in 0..4 {
        PromoFactory::new(db, venue.id)
            .event_id(Some(event.id))
            .build()
            .await
            .map_err(AppError::from)?;
    }
    PromoFactory::new(db, venue.id)
        .event_id(Some(event.id))
        .status(PromoStatus::Expired)
        .build()
        .await
        .map_err(AppError::from)?;

    let service = EventService::new(db, ZONE);
    let listed = service.list(&EventFilters::default()).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].promos.len(), 3);

    Ok(())
}

/// Tests the pagination envelope over a stored-column listing.
///
/// Expected: correct page slice, total, and has_more on each page
#[tokio::test]
async fn paginates_with_envelope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    for offset in 1..=5 {
        EventFactory::new(db, venue.id)
            .date(Some(local_date_offset(offset)))
            .build()
            .await
            .map_err(AppError::from)?;
    }

    let service = EventService::new(db, ZONE);

    let first = service
        .list_paginated(1, 2, &EventFilters::default())
        .await?;
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.total, 5);
    assert_eq!(first.page, 1);
    assert_eq!(first.page_size, 2);
    assert!(first.has_more);

    let last = service
        .list_paginated(3, 2, &EventFilters::default())
        .await?;
    assert_eq!(last.data.len(), 1);
    assert!(!last.has_more);

    Ok(())
}

/// Tests that reading a stale event eventually persists the corrected
/// status through the fire-and-forget reconciler.
///
/// Expected: stored status converges to the computed value shortly after
/// the read; the response itself already carried the computed status
#[tokio::test]
async fn read_reconciles_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;

    // Ended three days ago but still stored DRAFT.
    let stale = EventFactory::new(db, venue.id)
        .date(Some(local_date_offset(-3)))
        .status(EventStatus::Draft)
        .build()
        .await
        .map_err(AppError::from)?;

    let service = EventService::new(db, ZONE);
    let fetched = service.get(stale.id).await?;
    assert_eq!(fetched.status, EventStatus::Closed);

    // The write-back runs detached; poll briefly for it to land.
    let repo = crate::data::event::EventRepository::new(db);
    let mut stored = EventStatus::Draft;
    for _ in 0..50 {
        stored = repo
            .get_by_id(stale.id)
            .await
            .map_err(AppError::from)?
            .unwrap()
            .status;
        if stored == EventStatus::Closed {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert_eq!(stored, EventStatus::Closed);

    Ok(())
}

/// Tests that a missing event surfaces as a distinct not-found error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db, ZONE);
    let result = service.get(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
