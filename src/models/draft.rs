use serde::{Deserialize, Serialize};

use super::remote::RemoteId;

/// Diary entry sent to `diary/draft/post` or `diary/draft/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    pub child_id: RemoteId,
    pub user_token: String,
    /// Epoch milliseconds
    pub publish_schedule_date: i64,
    pub text_content: String,
    pub photos: Vec<String>,
    pub health: Vec<HealthRecord>,
    pub sleep: Vec<SleepRecord>,
    pub food: Vec<FoodRecord>,
    pub pick_up_person: String,
    /// Epoch milliseconds
    pub pick_up_time: i64,
    /// Only set when replacing an existing draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<RemoteId>,
}

/// Temperature check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub health_status: String,
    /// One decimal, e.g. "36.7"
    pub temperature: String,
    /// Epoch milliseconds; the service expects a string here
    #[serde(with = "millis_string")]
    pub health_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub sleep_time: i64,
    pub awake_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub food_menu: String,
    pub food_time: i64,
}

mod millis_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(millis: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&millis.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
