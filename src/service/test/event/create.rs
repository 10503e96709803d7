use super::*;
use crate::model::event::{CreateEventDto, EntryPriceInputDto, PromoInputDto};
use uuid::Uuid;

fn base_dto(venue_id: Uuid) -> CreateEventDto {
    CreateEventDto {
        venue_id,
        name: "Saturday Night".to_string(),
        date: "2030-06-15".to_string(),
        start_time: Some("23:00".to_string()),
        end_time: Some("05:00".to_string()),
        status: None,
        description: Some("Main room".to_string()),
        image: None,
        entry_prices: None,
        promos: None,
    }
}

/// Tests that a client-requested LIVE status is never persisted: creates
/// always land as DRAFT, and a far-future event also reads back as DRAFT.
///
/// Expected: Ok(EventDto) with status DRAFT
#[tokio::test]
async fn forces_status_to_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let service = EventService::new(db, ZONE);

    let mut dto = base_dto(venue.id);
    dto.status = Some("LIVE".to_string());
    let created = service.create(dto).await?;

    assert_eq!(created.status, EventStatus::Draft);
    assert_eq!(created.date.as_deref(), Some("2030-06-15"));
    assert_eq!(created.start_time.as_deref(), Some("23:00"));
    assert_eq!(created.end_time.as_deref(), Some("05:00"));

    Ok(())
}

/// Tests that an unknown status string is rejected rather than coerced.
///
/// Expected: Err(AppError::BadRequest) naming the allowed values
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let service = EventService::new(db, ZONE);

    let mut dto = base_dto(venue.id);
    dto.status = Some("ARCHIVED".to_string());
    let result = service.create(dto).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("DRAFT")),
        other => panic!("expected BadRequest, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests malformed date and time inputs.
///
/// Expected: Err(AppError::BadRequest) describing the expected format
#[tokio::test]
async fn rejects_malformed_date_and_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let service = EventService::new(db, ZONE);

    let mut dto = base_dto(venue.id);
    dto.date = "15/06/2030".to_string();
    assert!(matches!(
        service.create(dto).await,
        Err(AppError::BadRequest(_))
    ));

    let mut dto = base_dto(venue.id);
    dto.start_time = Some("25:99".to_string());
    assert!(matches!(
        service.create(dto).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that inline base64 poster payloads are rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inline_poster_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let service = EventService::new(db, ZONE);

    let mut dto = base_dto(venue.id);
    dto.image = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
    assert!(matches!(
        service.create(dto).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that creating against an unknown venue is a not-found error.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_venue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db, ZONE);
    let result = service.create(base_dto(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests nested entry price and promo validation and persistence.
///
/// Expected: valid nested rows round-trip; a bad gender or discount type
/// aborts the whole create
#[tokio::test]
async fn validates_and_persists_nested_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let service = EventService::new(db, ZONE);

    let mut dto = base_dto(venue.id);
    dto.entry_prices = Some(vec![EntryPriceInputDto {
        label: Some("Lista donna".to_string()),
        gender: Some("f".to_string()),
        start_time: Some("23:00".to_string()),
        end_time: Some("00:30".to_string()),
        price: 10.0,
    }]);
    dto.promos = Some(vec![PromoInputDto {
        title: "Open bar".to_string(),
        description: None,
        discount_type: "FIXED".to_string(),
        discount_value: Some(5.0),
        status: None,
    }]);

    let created = service.create(dto).await?;
    let rules = created.entry_prices.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].start_time.as_deref(), Some("23:00"));
    assert!((rules[0].price - 10.0).abs() < 1e-9);
    assert_eq!(created.promos.len(), 1);
    assert_eq!(created.promos[0].title, "Open bar");

    let mut dto = base_dto(venue.id);
    dto.entry_prices = Some(vec![EntryPriceInputDto {
        label: None,
        gender: Some("X".to_string()),
        start_time: None,
        end_time: None,
        price: 10.0,
    }]);
    assert!(matches!(
        service.create(dto).await,
        Err(AppError::BadRequest(_))
    ));

    let mut dto = base_dto(venue.id);
    dto.entry_prices = Some(vec![EntryPriceInputDto {
        label: None,
        gender: None,
        start_time: None,
        end_time: None,
        price: -4.0,
    }]);
    assert!(matches!(
        service.create(dto).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
