//! Classification of GitHub API responses into typed errors.

use log::debug;
use reqwest::{Response, StatusCode};

/// Error raised for a 4xx/5xx GitHub API response.
///
/// Carries the HTTP status code and the message extracted from the
/// response body. GitHub error payloads are JSON objects with a
/// top-level `message` field; anything else surfaces as the raw body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// HTTP 401
    Unauthorized(String),
    /// HTTP 403
    Forbidden(String),
    /// HTTP 404
    NotFound(String),
    /// Any other 4xx
    Client { status: u16, message: String },
    /// Any 5xx
    Server { status: u16, message: String },
}

impl ApiError {
    fn from_parts(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            s if s.is_client_error() => ApiError::Client {
                status: s.as_u16(),
                message,
            },
            s => ApiError::Server {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// The HTTP status code this error was raised for.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => *status,
        }
    }

    /// The message extracted from the response body.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg) => msg,
            ApiError::Client { message, .. } | ApiError::Server { message, .. } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => {
                write!(f, "Authentication failed: {}. Check your credentials.", msg)
            }
            ApiError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}", msg)
            }
            ApiError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            ApiError::Client { status, message } => {
                write!(f, "Client error (HTTP {}): {}", status, message)
            }
            ApiError::Server { status, message } => {
                write!(f, "Server error (HTTP {}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Inspects a completed response.
///
/// Passes successful responses through unchanged with the body unread.
/// For 4xx/5xx statuses the body is consumed to extract the error
/// message and a typed [`ApiError`] is returned.
pub async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(response);
    }

    debug!("GitHub API responded with HTTP {}", status);

    let message = extract_message(response).await;
    Err(ApiError::from_parts(status, message))
}

/// Pulls the `message` field out of a GitHub JSON error payload,
/// falling back to the raw body text.
async fn extract_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(payload) => payload
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(body),
        Err(_) => body,
    }
}
