use crate::data::event::{ComputedStatusQuery, EventRepository};
use crate::service::status::{self, StatusSnapshot};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod computed_status;
mod crud;

const ZONE: Tz = chrono_tz::Europe::Rome;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Fixed reference instant for window tests: 2024-06-16 00:00 in Rome
/// (22:00Z on the 15th), far from any DST transition.
fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 22, 0, 0).unwrap()
}
