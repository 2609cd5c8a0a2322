//! Client configuration.

use serde::Deserialize;

/// Default number of items requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Default GitHub API base URL. Resources are appended to it directly.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Configuration for a [`Client`](crate::Client).
///
/// All fields are optional except `per_page` and `base_url`, which fall
/// back to [`DEFAULT_PER_PAGE`] and [`DEFAULT_BASE_URL`]. A partial
/// configuration file deserializes against the same defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Login for basic authentication. Only used together with `password`.
    pub login: Option<String>,
    /// Password for basic authentication. Only used together with `login`.
    pub password: Option<String>,
    /// OAuth token, sent as the `access_token` query parameter on every request.
    pub token: Option<String>,
    pub user: Option<String>,
    pub repo: Option<String>,
    /// Items per page, sent as the `per_page` query parameter on every request.
    pub per_page: u32,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login: None,
            password: None,
            token: None,
            user: None,
            repo: None,
            per_page: DEFAULT_PER_PAGE,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Configuration authenticating with an OAuth token.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Self::default()
        }
    }

    /// Configuration authenticating with basic credentials.
    pub fn with_credentials(login: &str, password: &str) -> Self {
        Self {
            login: Some(login.to_string()),
            password: Some(password.to_string()),
            ..Self::default()
        }
    }
}
