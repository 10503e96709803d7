use axum::{routing::get, routing::post, Router};
use utoipa::OpenApi;

use crate::{
    controller::{event, promo, staff, venue},
    state::AppState,
};

/// OpenAPI document for the annotated API surface.
#[derive(OpenApi)]
#[openapi(paths(
    event::list_events,
    event::get_event,
    event::get_event_stats,
    event::create_event,
    event::update_event,
    event::delete_event,
    event::sync_event_statuses,
    promo::list_promos,
    promo::get_promo,
    promo::list_promos_by_event,
    promo::list_promos_by_venue,
    promo::create_promo,
    promo::update_promo,
    promo::delete_promo,
))]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/events",
            get(event::list_events).post(event::create_event),
        )
        .route("/api/events/sync-status", get(event::sync_event_statuses))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .patch(event::update_event)
                .delete(event::delete_event),
        )
        .route("/api/events/{id}/stats", get(event::get_event_stats))
        .route(
            "/api/venues",
            get(venue::list_venues).post(venue::create_venue),
        )
        .route(
            "/api/venues/{id}",
            get(venue::get_venue)
                .patch(venue::update_venue)
                .delete(venue::delete_venue),
        )
        .route("/api/venues/{id}/events", get(venue::list_venue_events))
        .route("/api/venues/{id}/promos", get(venue::list_venue_promos))
        .route("/api/venues/{id}/stats", get(venue::get_venue_stats))
        .route(
            "/api/promos",
            get(promo::list_promos).post(promo::create_promo),
        )
        .route(
            "/api/promos/{id}",
            get(promo::get_promo)
                .patch(promo::update_promo)
                .delete(promo::delete_promo),
        )
        .route(
            "/api/promos/by-event/{event_id}",
            get(promo::list_promos_by_event),
        )
        .route(
            "/api/promos/by-venue/{venue_id}",
            get(promo::list_promos_by_venue),
        )
        .route("/api/staff/entries", post(staff::record_entry))
        .route("/api/staff/bar-sales", post(staff::record_bar_sale))
        .route(
            "/api/staff/cloakroom-sales",
            post(staff::record_cloakroom_sale),
        )
        .route("/api/staff/table-sales", post(staff::record_table_sale))
}
