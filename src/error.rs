//! Error types for pugg.

use thiserror::Error;

/// Library-level error type for pugg operations.
#[derive(Error, Debug)]
pub enum PuggError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YouTube API key not configured. Set youtube.api_key in the config file or the YOUTUBE_API_KEY environment variable.")]
    MissingApiKey,

    #[error("YouTube API error: {0}")]
    Api(String),

    #[error("Malformed metadata: missing field '{0}'")]
    MissingField(&'static str),

    #[error("Transcript is empty")]
    EmptyTranscript,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for pugg operations.
pub type Result<T> = std::result::Result<T, PuggError>;
