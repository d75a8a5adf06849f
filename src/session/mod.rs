//! Session management module
//!
//! Logs in against the service, persists the session token and child
//! identifiers as JSON (session.json), and resolves the session for a
//! command run: `--token` flag, then environment, then the session file.

mod types;

pub use types::{Overrides, Session, SessionSource};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::api::{ApiClient, Endpoint};
use crate::error::{KdcliError, Result};
use crate::models::{Account, LoginRequest, TokenRequest};

/// Session file on disk
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, `None` when there is no session file
    pub fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session: Session = serde_json::from_str(&content).map_err(|e| {
            KdcliError::Session(format!(
                "Cannot parse session file '{}': {}. Run 'kdcli login' again.",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the session file. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Exchange credentials for a session without persisting it
pub fn authenticate(api: &ApiClient, username: &str, password: &str) -> Result<Session> {
    let request = LoginRequest {
        login_name: username.to_string(),
        password: password.to_string(),
    };
    let account: Account = api.post(Endpoint::Login, &request)?;
    Session::from_account(account, None)
}

/// Log in and persist the session
pub fn login(
    api: &ApiClient,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Session> {
    let session = authenticate(api, username, password)?;
    store.save(&session)?;
    tracing::info!(path = %store.path().display(), "session saved");
    Ok(session)
}

/// Validate a bare token by fetching the profile it belongs to
pub fn from_token(api: &ApiClient, token: &str) -> Result<Session> {
    let request = TokenRequest {
        user_token: token.to_string(),
    };
    let account: Account = api.post(Endpoint::MyProfile, &request)?;
    Session::from_account(account, Some(token))
}

/// Resolve the session for this run.
///
/// An explicit token must validate. Environment credentials that the
/// service rejects are skipped in favour of the next source.
pub fn resolve(
    api: &ApiClient,
    store: &SessionStore,
    explicit_token: Option<&str>,
    overrides: &Overrides,
) -> Result<Option<(Session, SessionSource)>> {
    if let Some(token) = explicit_token {
        return Ok(Some((from_token(api, token)?, SessionSource::Flag)));
    }

    if let Some((username, password)) = overrides.credentials() {
        match authenticate(api, username, password) {
            Ok(session) => return Ok(Some((session, SessionSource::EnvCredentials))),
            Err(KdcliError::Api { status, .. }) => {
                tracing::warn!(status, "environment credentials rejected");
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(token) = overrides.token.as_deref() {
        match from_token(api, token) {
            Ok(session) => return Ok(Some((session, SessionSource::EnvToken))),
            Err(KdcliError::Api { status, .. }) => {
                tracing::warn!(status, "environment token rejected");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(store.load()?.map(|session| (session, SessionSource::File)))
}

/// Like `resolve`, but a missing session is an error
pub fn require(
    api: &ApiClient,
    store: &SessionStore,
    explicit_token: Option<&str>,
    overrides: &Overrides,
) -> Result<Session> {
    let (session, source) =
        resolve(api, store, explicit_token, overrides)?.ok_or(KdcliError::NotLoggedIn)?;
    tracing::debug!(?source, "session resolved");
    Ok(session)
}
