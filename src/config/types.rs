use serde::{Deserialize, Serialize};

/// kdcli settings, read from config.toml in the kdcli home
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote service settings
    pub api: Api,

    /// Time-of-day offsets used when building a draft
    pub schedule: Schedule,

    /// Health record settings
    pub health: Health,

    /// Default draft contents
    pub defaults: Defaults,
}

/// Remote service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Offsets from local midnight, written as `[-]HH:MM`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Offset of the reference time zone from UTC
    pub utc_offset_hours: i32,

    /// When the draft gets published
    pub publish: String,

    /// Bedtime (negative: the evening before)
    pub sleep: String,

    /// Wake-up time
    pub awake: String,

    /// Breakfast time
    pub food: String,

    /// Temperature check time
    pub health: String,

    /// Pick-up time
    pub pick_up: String,
}

/// Health record settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    /// Status label sent with the health record
    pub status: String,

    /// Lowest temperature drawn, in °C
    pub temperature_min: f64,

    /// Highest temperature drawn, in °C
    pub temperature_max: f64,
}

/// Draft text used when no flag overrides it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub message: String,
    pub food_menu: String,
    pub pick_up_person: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "https://kidsdiary.jp/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            utc_offset_hours: 9,
            publish: "08:30".to_string(),
            sleep: "-04:00".to_string(),
            awake: "08:00".to_string(),
            food: "08:15".to_string(),
            health: "08:10".to_string(),
            pick_up: "16:30".to_string(),
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self {
            status: "Health".to_string(),
            temperature_min: 36.4,
            temperature_max: 37.1,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            message: "本日もよろしくお願いします".to_string(),
            food_menu: "Milk and bread".to_string(),
            pick_up_person: "Father".to_string(),
        }
    }
}
