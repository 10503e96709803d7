//! Cron jobs for automated maintenance tasks.

pub mod status_sync;
