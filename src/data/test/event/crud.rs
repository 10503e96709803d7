use entity::sea_orm_active_enums::{DiscountType, Gender, PromoStatus};
use rust_decimal::Decimal;

use super::*;
use crate::model::event::{CreateEventParams, EntryPriceParams, PromoParams, UpdateEventParams};
use test_utils::factory::promo::PromoFactory;

fn sample_rule(price: i64) -> EntryPriceParams {
    EntryPriceParams {
        label: Some("Lista".to_string()),
        gender: Some(Gender::F),
        start_time: Some(time(23, 0)),
        end_time: Some(time(0, 30)),
        price: Decimal::new(price, 0),
    }
}

fn sample_promo(venue_id: uuid::Uuid, title: &str) -> PromoParams {
    PromoParams {
        venue_id,
        event_id: None,
        title: title.to_string(),
        description: None,
        discount_type: DiscountType::Percentage,
        discount_value: Some(Decimal::new(20, 0)),
        status: PromoStatus::Active,
    }
}

/// Tests creating an event together with nested entry prices and promos.
///
/// Expected: Ok(Model) with all nested rows persisted and linked
#[tokio::test]
async fn creates_event_with_nested_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let repo = EventRepository::new(db);

    let created = repo
        .create(CreateEventParams {
            venue_id: venue.id,
            name: "Opening Night".to_string(),
            description: Some("Season opener".to_string()),
            image: Some("events/posters/opening.webp".to_string()),
            date: date(2024, 6, 15),
            start_time: Some(time(23, 0)),
            end_time: Some(time(5, 0)),
            status: EventStatus::Draft,
            entry_prices: vec![sample_rule(15), sample_rule(20)],
            promos: vec![sample_promo(venue.id, "Early bird")],
        })
        .await?;

    let (event, rules, promos) = repo.get_with_relations(created.id).await?.unwrap();
    assert_eq!(event.name, "Opening Night");
    assert_eq!(event.status, EventStatus::Draft);
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|rule| rule.event_id == created.id));
    assert_eq!(promos.len(), 1);
    assert_eq!(promos[0].event_id, Some(created.id));
    assert_eq!(promos[0].venue_id, venue.id);

    Ok(())
}

/// Tests that a provided entry price list replaces the stored set wholesale.
///
/// Expected: old rules gone, only the new set remains
#[tokio::test]
async fn update_replaces_entry_prices_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let repo = EventRepository::new(db);

    let created = repo
        .create(CreateEventParams {
            venue_id: venue.id,
            name: "Event".to_string(),
            description: None,
            image: None,
            date: date(2024, 6, 15),
            start_time: Some(time(23, 0)),
            end_time: Some(time(5, 0)),
            status: EventStatus::Draft,
            entry_prices: vec![sample_rule(15), sample_rule(20)],
            promos: Vec::new(),
        })
        .await?;

    repo.update(
        created.id,
        UpdateEventParams {
            entry_prices: Some(vec![sample_rule(25)]),
            ..Default::default()
        },
    )
    .await?;

    let (_, rules, _) = repo.get_with_relations(created.id).await?.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].price, Decimal::new(25, 0));

    Ok(())
}

/// Tests that a provided promo list replaces the event's promos wholesale
/// while an absent list leaves them untouched.
///
/// Expected: promos replaced only when the field is provided
#[tokio::test]
async fn update_replaces_promos_only_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let repo = EventRepository::new(db);

    let created = repo
        .create(CreateEventParams {
            venue_id: venue.id,
            name: "Event".to_string(),
            description: None,
            image: None,
            date: date(2024, 6, 15),
            start_time: None,
            end_time: None,
            status: EventStatus::Draft,
            entry_prices: Vec::new(),
            promos: vec![sample_promo(venue.id, "Original")],
        })
        .await?;

    // No promo list: the linked promo stays.
    repo.update(
        created.id,
        UpdateEventParams {
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await?;
    let (event, _, promos) = repo.get_with_relations(created.id).await?.unwrap();
    assert_eq!(event.name, "Renamed");
    assert_eq!(promos.len(), 1);
    assert_eq!(promos[0].title, "Original");

    // Provided list: replaced wholesale.
    repo.update(
        created.id,
        UpdateEventParams {
            promos: Some(vec![
                sample_promo(venue.id, "Replacement A"),
                sample_promo(venue.id, "Replacement B"),
            ]),
            ..Default::default()
        },
    )
    .await?;
    let (_, _, promos) = repo.get_with_relations(created.id).await?.unwrap();
    let mut titles: Vec<_> = promos.iter().map(|promo| promo.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Replacement A", "Replacement B"]);

    Ok(())
}

/// Tests cascading delete across every dependent table.
///
/// Expected: event, rules, promos, entries, sales, and tables all removed
#[tokio::test]
async fn delete_removes_all_dependents() -> Result<(), DbErr> {
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let repo = EventRepository::new(db);

    let created = repo
        .create(CreateEventParams {
            venue_id: venue.id,
            name: "Event".to_string(),
            description: None,
            image: None,
            date: date(2024, 6, 15),
            start_time: Some(time(23, 0)),
            end_time: Some(time(5, 0)),
            status: EventStatus::Draft,
            entry_prices: vec![sample_rule(15)],
            promos: vec![sample_promo(venue.id, "Promo")],
        })
        .await?;

    factory::create_entry(db, created.id, Some(Gender::M)).await?;
    factory::create_bar_sale(db, created.id, Decimal::new(30, 0)).await?;
    factory::create_cloakroom_sale(db, created.id, Decimal::new(5, 0)).await?;
    let table = factory::create_event_table(db, created.id).await?;
    factory::create_table_sale(db, table.id, Decimal::new(200, 0)).await?;

    repo.delete_with_dependents(created.id).await?;

    assert!(repo.get_by_id(created.id).await?.is_none());
    assert_eq!(
        entity::prelude::EventEntryPrice::find()
            .filter(entity::event_entry_price::Column::EventId.eq(created.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::Promo::find()
            .filter(entity::promo::Column::EventId.eq(created.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(entity::prelude::Entry::find().count(db).await?, 0);
    assert_eq!(entity::prelude::BarSale::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CloakroomSale::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventTable::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TableSale::find().count(db).await?, 0);

    Ok(())
}

/// Tests the active-promo preview map used by listings.
///
/// Expected: only active promos, capped at three per event
#[tokio::test]
async fn active_promo_previews_caps_and_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (venue, event) = factory::helpers::create_event_with_venue(db).await?;

    for _ in 0..4 {
        PromoFactory::new(db, venue.id)
            .event_id(Some(event.id))
            .build()
            .await?;
    }
    PromoFactory::new(db, venue.id)
        .event_id(Some(event.id))
        .status(PromoStatus::Expired)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let previews = repo.active_promo_previews(&[event.id]).await?;

    let promos = previews.get(&event.id).unwrap();
    assert_eq!(promos.len(), 3);
    assert!(promos
        .iter()
        .all(|promo| promo.status == PromoStatus::Active));

    Ok(())
}

/// Tests totals aggregation across entries and all three sales ledgers.
///
/// Expected: counts and sums match the inserted rows
#[tokio::test]
async fn totals_aggregates_entries_and_sales() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sales_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_venue, event) = factory::helpers::create_event_with_venue(db).await?;

    factory::create_entry(db, event.id, Some(Gender::M)).await?;
    factory::create_entry(db, event.id, Some(Gender::F)).await?;
    factory::create_entry(db, event.id, None).await?;
    factory::create_bar_sale(db, event.id, Decimal::new(305, 1)).await?;
    factory::create_bar_sale(db, event.id, Decimal::new(95, 1)).await?;
    factory::create_cloakroom_sale(db, event.id, Decimal::new(5, 0)).await?;
    let table = factory::create_event_table(db, event.id).await?;
    factory::create_table_sale(db, table.id, Decimal::new(150, 0)).await?;
    factory::create_table_sale(db, table.id, Decimal::new(250, 0)).await?;

    let repo = EventRepository::new(db);
    let totals = repo.totals(event.id).await?;

    assert_eq!(totals.total_entries, 3);
    assert!((totals.total_bar - 40.0).abs() < 1e-9);
    assert!((totals.total_cloakroom - 5.0).abs() < 1e-9);
    assert!((totals.total_tables - 400.0).abs() < 1e-9);

    Ok(())
}
