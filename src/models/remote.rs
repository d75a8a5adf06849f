use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier assigned by the service (child, draft).
///
/// Kept as raw JSON so it is sent back exactly as received, whether the
/// service uses strings or numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteId(Value);

impl From<&str> for RemoteId {
    fn from(id: &str) -> Self {
        Self(Value::String(id.to_string()))
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of the `login` call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_name: String,
    pub password: String,
}

/// Body of calls that only need the session token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub user_token: String,
}

/// Body of calls scoped to one child, optionally one draft
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRequest {
    pub child_id: RemoteId,
    pub user_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<RemoteId>,
}

// ============================================================================
// Responses
// ============================================================================

/// Account data returned by `login` and `my_profile`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub user_token: Option<String>,
    #[serde(default)]
    pub child_ids: Vec<RemoteId>,
    #[serde(default)]
    pub login_name: Option<String>,
}

/// Paged listing shape shared by drafts and photos
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub total_hits: u64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Listing<T> {
    /// Entries of the listing, empty when the service reports no hits
    pub fn into_entries(self) -> Vec<T> {
        if self.total_hits == 0 {
            Vec::new()
        } else {
            self.list
        }
    }
}

/// One entry of the remote draft list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub draft_id: RemoteId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One album photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
