//! Draft payload builder
//!
//! Turns a publishing date, free text, and the configured time-of-day
//! offsets into the diary entry the service expects.

mod schedule;

pub use schedule::{epoch_millis, zone, PublishDay, TimeOffsets};

use chrono::{FixedOffset, NaiveDate};
use rand::Rng;

use crate::config::{Config, Health};
use crate::error::{KdcliError, Result};
use crate::models::{DraftPayload, FoodRecord, HealthRecord, RemoteId, SleepRecord};

/// Inclusive temperature range in tenths of a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    min_tenths: u32,
    max_tenths: u32,
}

impl TemperatureRange {
    pub fn new(min_tenths: u32, max_tenths: u32) -> Result<Self> {
        if min_tenths == 0 || min_tenths > max_tenths {
            return Err(KdcliError::Config(format!(
                "Invalid temperature range: {}.{} to {}.{}",
                min_tenths / 10,
                min_tenths % 10,
                max_tenths / 10,
                max_tenths % 10
            )));
        }
        Ok(Self {
            min_tenths,
            max_tenths,
        })
    }

    pub fn from_health(health: &Health) -> Result<Self> {
        Self::new(
            to_tenths(health.temperature_min)?,
            to_tenths(health.temperature_max)?,
        )
    }

    /// Uniform draw, formatted with one decimal
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let tenths = rng.gen_range(self.min_tenths..=self.max_tenths);
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

fn to_tenths(celsius: f64) -> Result<u32> {
    if !celsius.is_finite() || !(0.0..=100.0).contains(&celsius) {
        return Err(KdcliError::Config(format!(
            "Invalid temperature: {}",
            celsius
        )));
    }
    Ok((celsius * 10.0).round() as u32)
}

/// Free-text parts of a draft
#[derive(Debug, Clone)]
pub struct DraftContent {
    pub message: String,
    pub food_menu: String,
    pub pick_up_person: String,
    pub photos: Vec<String>,
}

/// Builds draft payloads for one child
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    offsets: TimeOffsets,
    zone: FixedOffset,
    temperature: TemperatureRange,
    health_status: String,
}

impl PayloadBuilder {
    pub fn new(
        offsets: TimeOffsets,
        zone: FixedOffset,
        temperature: TemperatureRange,
        health_status: impl Into<String>,
    ) -> Self {
        Self {
            offsets,
            zone,
            temperature,
            health_status: health_status.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            TimeOffsets::from_schedule(&config.schedule)?,
            zone(config.schedule.utc_offset_hours)?,
            TemperatureRange::from_health(&config.health)?,
            config.health.status.clone(),
        ))
    }

    /// Reference time zone the offsets are applied in
    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        child_id: RemoteId,
        user_token: &str,
        date: NaiveDate,
        content: DraftContent,
        rng: &mut R,
    ) -> DraftPayload {
        let at = |offset| epoch_millis(date, offset, self.zone);

        DraftPayload {
            child_id,
            user_token: user_token.to_string(),
            publish_schedule_date: at(self.offsets.publish),
            text_content: content.message,
            photos: content.photos,
            health: vec![HealthRecord {
                health_status: self.health_status.clone(),
                temperature: self.temperature.draw(rng),
                health_time: at(self.offsets.health),
            }],
            sleep: vec![SleepRecord {
                sleep_time: at(self.offsets.sleep),
                awake_time: at(self.offsets.awake),
            }],
            food: vec![FoodRecord {
                food_menu: content.food_menu,
                food_time: at(self.offsets.food),
            }],
            pick_up_person: content.pick_up_person,
            pick_up_time: at(self.offsets.pick_up),
            draft_id: None,
        }
    }
}
