use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

/// Client-side rejection of a submitted video URL. The `Display` text is
/// what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a YouTube video URL.")]
    Empty,

    #[error("Please enter a valid URL format (e.g., https://www.youtube.com/watch?v=...).")]
    Malformed,

    #[error("URL must be a valid YouTube video link (e.g., youtube.com/watch?v=... or youtu.be/...).")]
    NotYouTube,
}

pub type Result<T> = std::result::Result<T, Error>;
