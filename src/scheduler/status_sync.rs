use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::event::EventService};

/// Starts the event status sweep scheduler.
///
/// Runs every five minutes and bulk-corrects stored statuses for events
/// dated within the default moving window. Reads already recompute status on
/// the fly; this job exists so consumers with no read traffic (raw table
/// scans, downstream exports, plain equality filters) also see correct data.
///
/// # Arguments
/// - `db`: Database connection
/// - `zone`: Venue-local timezone for the window computation
pub async fn start_scheduler(db: DatabaseConnection, zone: Tz) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every 5 minutes
    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            let service = EventService::new(&db, zone);
            match service.sync_statuses_now(None, None).await {
                Ok(result) if result.updated > 0 => {
                    tracing::info!("Status sweep corrected {} events", result.updated);
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error running status sweep: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event status sweep scheduler started");

    Ok(())
}
