//! Blocking HTTP client for the KidsDiary API
//!
//! Every endpoint is a JSON POST; HTTP 200 is success, anything else is
//! surfaced as `KdcliError::Api` carrying the status and response body.

mod endpoint;

pub use endpoint::Endpoint;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{KdcliError, Result};

/// Client holding the reqwest blocking client and the service base URL
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    /// POST `body` as JSON and parse the JSON response
    pub fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = self.execute(endpoint, body)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// POST `body` as JSON where only the status matters
    pub fn send<B>(&self, endpoint: Endpoint, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(endpoint, body).map(|_| ())
    }

    fn execute<B>(&self, endpoint: Endpoint, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        tracing::debug!(%url, "POST");

        let res = self.client.post(&url).json(body).send()?;
        let status = res.status();
        let text = res.text()?;

        if status != StatusCode::OK {
            tracing::debug!(%endpoint, status = status.as_u16(), body = %text, "request failed");
            return Err(KdcliError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
