use rust_decimal::Decimal;

use super::*;
use entity::sea_orm_active_enums::Gender;

/// Tests per-event totals through the service.
///
/// Expected: entry count and sale sums for the requested event only
#[tokio::test]
async fn aggregates_event_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, event) = factory::helpers::create_event_with_venue(db).await?;
    let other = factory::create_event(db, venue.id).await?;

    factory::create_entry(db, event.id, Some(Gender::M)).await?;
    factory::create_entry(db, event.id, Some(Gender::F)).await?;
    factory::create_bar_sale(db, event.id, Decimal::new(42, 0)).await?;
    factory::create_cloakroom_sale(db, event.id, Decimal::new(3, 0)).await?;
    let table = factory::create_event_table(db, event.id).await?;
    factory::create_table_sale(db, table.id, Decimal::new(180, 0)).await?;

    // Noise on another event; must not leak into the totals.
    factory::create_entry(db, other.id, None).await?;
    factory::create_bar_sale(db, other.id, Decimal::new(999, 0)).await?;

    let service = EventService::new(db, ZONE);
    let stats = service.stats(event.id).await?;

    assert_eq!(stats.event_id, event.id);
    assert_eq!(stats.total_entries, 2);
    assert!((stats.total_bar - 42.0).abs() < 1e-9);
    assert!((stats.total_cloakroom - 3.0).abs() < 1e-9);
    assert!((stats.total_tables - 180.0).abs() < 1e-9);

    Ok(())
}

/// Tests venue-wide totals summed across the venue's events.
///
/// Expected: per-event breakdown plus correct grand totals
#[tokio::test]
async fn sums_stats_across_venue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let first = factory::create_event(db, venue.id).await?;
    let second = factory::create_event(db, venue.id).await?;

    factory::create_entry(db, first.id, None).await?;
    factory::create_entry(db, second.id, None).await?;
    factory::create_entry(db, second.id, None).await?;
    factory::create_bar_sale(db, first.id, Decimal::new(10, 0)).await?;
    factory::create_bar_sale(db, second.id, Decimal::new(15, 0)).await?;

    let service = EventService::new(db, ZONE);
    let stats = service.venue_stats(venue.id).await?;

    assert_eq!(stats.venue_id, venue.id);
    assert_eq!(stats.events.len(), 2);
    assert_eq!(stats.total_entries, 3);
    assert!((stats.total_bar - 25.0).abs() < 1e-9);

    Ok(())
}

/// Tests that stats for an unknown event or venue report not found.
///
/// Expected: Err(AppError::NotFound) in both cases
#[tokio::test]
async fn reports_not_found_for_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db, ZONE);

    assert!(matches!(
        service.stats(uuid::Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.venue_stats(uuid::Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
