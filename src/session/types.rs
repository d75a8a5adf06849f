use serde::{Deserialize, Serialize};

use crate::error::{KdcliError, Result};
use crate::models::{Account, RemoteId};

const TOKEN_ENV: &str = "KDCLI_TOKEN";
const USERNAME_ENV: &str = "KDCLI_USERNAME";
const PASSWORD_ENV: &str = "KDCLI_PASSWORD";

/// Logged-in session, persisted as session.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_token: String,
    pub child_ids: Vec<RemoteId>,
    #[serde(default)]
    pub login_name: String,
}

impl Session {
    /// Build a session from a `login` or `my_profile` response. Profile
    /// responses may omit the token, in which case `known_token` is used.
    pub fn from_account(account: Account, known_token: Option<&str>) -> Result<Self> {
        let user_token = account
            .user_token
            .or_else(|| known_token.map(str::to_string))
            .ok_or_else(|| KdcliError::Session("response carries no user token".to_string()))?;

        Ok(Self {
            user_token,
            child_ids: account.child_ids,
            login_name: account.login_name.unwrap_or_default(),
        })
    }

    /// Child the diary entries are written for
    pub fn child_id(&self) -> Result<&RemoteId> {
        self.child_ids.first().ok_or_else(|| {
            KdcliError::Session("no child is linked to this account".to_string())
        })
    }
}

/// Where a resolved session came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Flag,
    EnvCredentials,
    EnvToken,
    File,
}

/// Credentials supplied outside the session file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            token: non_empty_env(TOKEN_ENV),
            username: non_empty_env(USERNAME_ENV),
            password: non_empty_env(PASSWORD_ENV),
        }
    }

    /// Username and password, only when both are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
            _ => None,
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
