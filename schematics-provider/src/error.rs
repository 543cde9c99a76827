//! Error types for the Schematics REST client.

use serde::Deserialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the Schematics API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the service.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected model.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Token cannot be sent as a header value.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Created object came back without an id.
    #[error("Response from {0} carried no id")]
    MissingId(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Whether the service answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn an error response body into a readable message.
///
/// The service reports either `{"errors": [{"code", "message"}]}` or a flat
/// `{"message": ..}`; anything else is passed through verbatim.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return body.to_string();
    };

    let items: Vec<String> = parsed
        .errors
        .iter()
        .filter_map(|e| match (&e.code, &e.message) {
            (Some(code), Some(msg)) => Some(format!("{}: {}", code, msg)),
            (None, Some(msg)) => Some(msg.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        })
        .collect();

    if !items.is_empty() {
        items.join("; ")
    } else if let Some(msg) = parsed.message.or(parsed.error) {
        msg
    } else {
        body.to_string()
    }
}
