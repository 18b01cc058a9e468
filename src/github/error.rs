//! Issue tracker error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Request to issue tracker failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Issue tracker returned HTTP {}: {message}", .status.as_u16())]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode issue tracker response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid repository {0:?}, expected owner/name")]
    InvalidRepository(String),

    #[error("Token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

impl TrackerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
