mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    // Start the periodic status sweep
    let scheduler_db = db.clone();
    let scheduler_zone = config.events_timezone;
    tokio::spawn(async move {
        if let Err(e) = scheduler::status_sync::start_scheduler(scheduler_db, scheduler_zone).await
        {
            tracing::error!("Status sweep scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, config.events_timezone, config.cron_secret.clone());
    let app = router::router()
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", router::ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
