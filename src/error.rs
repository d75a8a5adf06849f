use thiserror::Error;

/// kdcli error types
#[derive(Error, Debug)]
pub enum KdcliError {
    #[error("Credentials not found! Please login.")]
    NotLoggedIn,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("{endpoint} API returned status code: {status}, message: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for kdcli operations
pub type Result<T> = std::result::Result<T, KdcliError>;
