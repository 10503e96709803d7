//! Event status computation.
//!
//! An event's `Live`/`Closed` statuses are never trusted from storage: they
//! are derived from the event's calendar date and start/end wall-clock times,
//! interpreted in the venue-local timezone. This module holds the pure pieces
//! of that derivation: the wall-clock-to-instant resolver, the window
//! calculator, and the local-time snapshot the query layer uses to express
//! the same window as a database predicate. Calculator and snapshot must stay
//! in lockstep; the repository tests assert their equivalence.

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use entity::sea_orm_active_enums::EventStatus;

/// UTC offset of `zone` at the given instant, as a duration satisfying
/// `local = utc + offset`.
pub fn offset_at(zone: Tz, instant: DateTime<Utc>) -> Duration {
    let offset = zone.offset_from_utc_datetime(&instant.naive_utc());
    Duration::seconds(i64::from(offset.fix().local_minus_utc()))
}

/// Converts a venue-local wall-clock date and time to an absolute instant.
///
/// Two-pass conversion: the wall-clock fields are first treated as if they
/// were UTC, then corrected by the zone offset looked up at that naive
/// instant, then corrected again with the offset at the first estimate. The
/// second pass is what keeps DST boundaries deterministic: the offset is a
/// function of the instant, not of the wall-clock fields, so a single lookup
/// mishandles times that fall in a spring-forward gap or a fall-back overlap.
///
/// Seconds are discarded; the window logic works at minute precision.
pub fn zoned_wall_clock_to_instant(zone: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let base = Utc.from_utc_datetime(&date.and_time(truncate_to_minute(time)));
    let first = base - offset_at(zone, base);
    base - offset_at(zone, first)
}

/// Effective status of an event as of `now`.
///
/// With a missing date, start, or end the window cannot be computed and the
/// stored status is returned verbatim. Otherwise both boundaries are resolved
/// on the event's calendar date; an end at or before the start means the
/// event runs past midnight, so the end boundary moves 24 hours forward.
pub fn effective_status(
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    stored: EventStatus,
    zone: Tz,
    now: DateTime<Utc>,
) -> EventStatus {
    let (Some(date), Some(start), Some(end)) = (date, start_time, end_time) else {
        return stored;
    };

    let start_at = zoned_wall_clock_to_instant(zone, date, start);
    let mut end_at = zoned_wall_clock_to_instant(zone, date, end);
    if end_at <= start_at {
        end_at += Duration::hours(24);
    }

    if now < start_at {
        EventStatus::Draft
    } else if now < end_at {
        EventStatus::Live
    } else {
        EventStatus::Closed
    }
}

/// One per-query snapshot of "now" in venue-local wall-clock terms.
///
/// The repository's computed-status predicate compares event date/time
/// columns against these values, so every row in a query observes the same
/// instant. `local_minute` is a 5-char `HH:MM` string compared against
/// `substr(time_column, 1, 5)`, pinning the predicate to the calculator's
/// minute precision.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    /// Calendar date of "now" in the venue zone.
    pub local_date: NaiveDate,
    /// `local_date - 1 day`; comparison anchor for windows that wrapped past
    /// midnight (their end lives on the day after the event's date).
    pub prev_date: NaiveDate,
    /// Wall-clock `HH:MM` of "now" in the venue zone.
    pub local_minute: String,
}

impl StatusSnapshot {
    pub fn take(zone: Tz, now: DateTime<Utc>) -> Self {
        let local = local_now(zone, now);
        Self {
            local_date: local.date(),
            prev_date: local.date() - Duration::days(1),
            local_minute: local.time().format("%H:%M").to_string(),
        }
    }
}

/// Venue-local wall-clock value of `now`.
pub fn local_now(zone: Tz, now: DateTime<Utc>) -> NaiveDateTime {
    (now + offset_at(zone, now)).naive_utc()
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
