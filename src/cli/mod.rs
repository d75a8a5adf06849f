//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - draft: list drafts, or create/update today's draft
//! - login / logout: manage the stored session
//! - photo: list album photos
//! - config init: write a default settings file
//! - version: print the version
use std::path::PathBuf;

pub mod auth;
pub mod config;
pub mod draft;
pub mod photo;

use crate::api::ApiClient;
use crate::config::{self as settings, Config};
use crate::error::Result;
use crate::session::{self, Overrides, Session, SessionStore};

/// Flags shared by every subcommand
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub token: Option<String>,
}

/// Settings, HTTP client, and session file for one command run
pub struct Context {
    pub config: Config,
    pub api: ApiClient,
    pub store: SessionStore,
    token: Option<String>,
}

impl Context {
    pub fn load(global: GlobalArgs) -> Result<Self> {
        let config_path = match global.config {
            Some(path) => path,
            None => settings::default_config_path()?,
        };
        let config = settings::resolve(&config_path)?;
        let api = ApiClient::from_config(&config)?;

        Ok(Self {
            config,
            api,
            store: session_store()?,
            token: global.token,
        })
    }

    /// Session for commands that talk to the diary; errors when logged out
    pub fn session(&self) -> Result<Session> {
        let session = session::require(
            &self.api,
            &self.store,
            self.token.as_deref(),
            &Overrides::from_env(),
        )?;
        tracing::debug!(login_name = %session.login_name, "session loaded");
        Ok(session)
    }
}

/// Tell the user which account a command runs as
pub fn print_login(session: &Session) {
    if !session.login_name.is_empty() {
        println!("Logged in as {}", session.login_name);
    }
}

pub fn session_store() -> Result<SessionStore> {
    Ok(SessionStore::new(settings::default_session_path()?))
}

/// Print the version
pub fn version() -> Result<()> {
    println!("{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
