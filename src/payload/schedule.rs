//! Time-of-day offsets and epoch conversion in the reference time zone

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

use crate::config::Schedule;
use crate::error::{KdcliError, Result};

/// Drafts created at or after this local hour are published the next day
const NEAREST_CUTOFF_HOUR: u32 = 9;

/// Named offsets from local midnight of the publishing day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOffsets {
    pub publish: Duration,
    pub sleep: Duration,
    pub awake: Duration,
    pub food: Duration,
    pub health: Duration,
    pub pick_up: Duration,
}

impl Default for TimeOffsets {
    fn default() -> Self {
        Self {
            publish: Duration::hours(8) + Duration::minutes(30),
            sleep: Duration::hours(-4),
            awake: Duration::hours(8),
            food: Duration::hours(8) + Duration::minutes(15),
            health: Duration::hours(8) + Duration::minutes(10),
            pick_up: Duration::hours(16) + Duration::minutes(30),
        }
    }
}

impl TimeOffsets {
    pub fn from_schedule(schedule: &Schedule) -> Result<Self> {
        Ok(Self {
            publish: parse_field("publish", &schedule.publish)?,
            sleep: parse_field("sleep", &schedule.sleep)?,
            awake: parse_field("awake", &schedule.awake)?,
            food: parse_field("food", &schedule.food)?,
            health: parse_field("health", &schedule.health)?,
            pick_up: parse_field("pick_up", &schedule.pick_up)?,
        })
    }
}

fn parse_field(name: &str, raw: &str) -> Result<Duration> {
    parse_offset(raw).ok_or_else(|| {
        KdcliError::Config(format!(
            "Invalid schedule.{} offset '{}': expected [-]HH:MM",
            name, raw
        ))
    })
}

/// Parse `[-]HH:MM` into a signed offset. Hours may exceed 23 so that
/// times on the following day can be expressed.
pub fn parse_offset(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let (hours, minutes) = body.split_once(':')?;
    if hours.is_empty() || minutes.len() != 2 {
        return None;
    }
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if !(0..48).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    let offset = Duration::hours(hours) + Duration::minutes(minutes);
    Some(if negative { -offset } else { offset })
}

/// Fixed reference zone, e.g. `+9` for JST
pub fn zone(utc_offset_hours: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(utc_offset_hours * 3600).ok_or_else(|| {
        KdcliError::Config(format!("Invalid UTC offset: {} hours", utc_offset_hours))
    })
}

/// Epoch milliseconds of `date`'s local midnight plus `offset`, in `zone`
pub fn epoch_millis(date: NaiveDate, offset: Duration, zone: FixedOffset) -> i64 {
    let local = date.and_time(NaiveTime::MIN) + offset;
    let utc = local - Duration::seconds(i64::from(zone.local_minus_utc()));
    utc.and_utc().timestamp_millis()
}

/// Which day a new draft gets published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishDay {
    Today,
    /// Today before the cutoff hour, tomorrow after it
    Nearest,
    On(NaiveDate),
}

impl PublishDay {
    /// Calendar date in `zone` for the given instant
    pub fn resolve(self, now: DateTime<Utc>, zone: FixedOffset) -> NaiveDate {
        let local = now.with_timezone(&zone);
        match self {
            PublishDay::Today => local.date_naive(),
            PublishDay::On(date) => date,
            PublishDay::Nearest => {
                if local.hour() < NEAREST_CUTOFF_HOUR {
                    local.date_naive()
                } else {
                    local.date_naive() + Duration::days(1)
                }
            }
        }
    }
}
