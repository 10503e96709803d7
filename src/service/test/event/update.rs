use super::*;
use crate::model::event::{EntryPriceInputDto, UpdateEventDto};
use test_utils::factory::event::EventFactory;

/// Tests that only DRAFT is honored as a status write on update.
///
/// Expected: LIVE request leaves the stored column untouched; DRAFT request
/// writes through
#[tokio::test]
async fn only_draft_status_is_writable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    // Missing times keep the effective status equal to the stored one.
    let event = EventFactory::new(db, venue.id)
        .start_time(None)
        .end_time(None)
        .status(EventStatus::Closed)
        .build()
        .await?;

    let service = EventService::new(db, ZONE);

    service
        .update(
            event.id,
            UpdateEventDto {
                status: Some("LIVE".to_string()),
                ..Default::default()
            },
        )
        .await?;
    let repo = crate::data::event::EventRepository::new(db);
    assert_eq!(
        repo.get_by_id(event.id).await?.unwrap().status,
        EventStatus::Closed
    );

    service
        .update(
            event.id,
            UpdateEventDto {
                status: Some("draft".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(
        repo.get_by_id(event.id).await?.unwrap().status,
        EventStatus::Draft
    );

    Ok(())
}

/// Tests partial update semantics: provided fields overwrite, absent fields
/// survive.
///
/// Expected: name and times changed, description untouched
#[tokio::test]
async fn overwrites_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let event = EventFactory::new(db, venue.id)
        .description(Some("Original description".to_string()))
        .build()
        .await?;

    let service = EventService::new(db, ZONE);
    let updated = service
        .update(
            event.id,
            UpdateEventDto {
                name: Some("Renamed".to_string()),
                date: Some("2030-12-31".to_string()),
                start_time: Some("22:00".to_string()),
                end_time: Some("04:00".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.date.as_deref(), Some("2030-12-31"));
    assert_eq!(updated.start_time.as_deref(), Some("22:00"));
    assert_eq!(updated.end_time.as_deref(), Some("04:00"));
    assert_eq!(
        updated.description.as_deref(),
        Some("Original description")
    );

    Ok(())
}

/// Tests wholesale replacement of the entry price list through the service.
///
/// Expected: the new single rule is the only one left
#[tokio::test]
async fn replaces_entry_price_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_venue, event) = factory::helpers::create_event_with_venue(db).await?;
    factory::create_entry_price(db, event.id).await?;
    factory::create_entry_price(db, event.id).await?;

    let service = EventService::new(db, ZONE);
    let updated = service
        .update(
            event.id,
            UpdateEventDto {
                entry_prices: Some(vec![EntryPriceInputDto {
                    label: Some("Door".to_string()),
                    gender: None,
                    start_time: None,
                    end_time: None,
                    price: 25.0,
                }]),
                ..Default::default()
            },
        )
        .await?;

    let rules = updated.entry_prices.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].label.as_deref(), Some("Door"));

    Ok(())
}

/// Tests that updating an unknown event is a not-found error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db, ZONE);
    let result = service
        .update(uuid::Uuid::new_v4(), UpdateEventDto::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting through the service.
///
/// Expected: Ok, then a follow-up get reports not found
#[tokio::test]
async fn deletes_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_venue, event) = factory::helpers::create_event_with_venue(db).await?;

    let service = EventService::new(db, ZONE);
    service.delete(event.id).await?;

    assert!(matches!(
        service.get(event.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
