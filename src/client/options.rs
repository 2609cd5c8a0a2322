//! Per-request options and parameter merging.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::http::{Credentials, SendOptions};

/// Options accepted by every [`Client`](crate::Client) request.
///
/// Recognized transport options have typed builder methods: query
/// [`param`](Self::param)s, [`header`](Self::header)s, a
/// [`json`](Self::json) body, a per-request [`timeout`](Self::timeout)
/// and a [`basic_auth`](Self::basic_auth) override. Anything else goes
/// through [`set`](Self::set) and is folded into the query parameters
/// when the request is built, so callers can pass arbitrary API query
/// parameters without nesting them explicitly.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    timeout: Option<Duration>,
    auth: Option<Credentials>,
    extra: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit query parameter.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a request header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the JSON request body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a timeout for this request only. No timeout applies by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides basic authentication for this request only.
    pub fn basic_auth(mut self, login: &str, password: &str) -> Self {
        self.auth = Some(Credentials {
            login: login.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Sets an arbitrary key/value pair, treated as an API query
    /// parameter. A key set here replaces an explicit parameter of the
    /// same name.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.extra.insert(key.to_string(), value.to_string());
        self
    }

    /// Folds the unrecognized keys into the query parameters and yields
    /// the normalized option set for the transport.
    pub(crate) fn into_send_options(self) -> SendOptions {
        let Self {
            mut params,
            headers,
            body,
            timeout,
            auth,
            extra,
        } = self;

        for (key, value) in extra {
            params.retain(|(k, _)| k != &key);
            params.push((key, value));
        }

        SendOptions {
            params,
            headers,
            body,
            timeout,
            auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let options = RequestOptions::new().into_send_options();
        assert!(options.params.is_empty());
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert!(options.timeout.is_none());
        assert!(options.auth.is_none());
    }

    #[test]
    fn test_extra_keys_fold_into_params() {
        let options = RequestOptions::new()
            .set("sort", "created")
            .set("direction", "desc")
            .into_send_options();
        assert!(options.params.contains(&("sort".to_string(), "created".to_string())));
        assert!(options.params.contains(&("direction".to_string(), "desc".to_string())));
    }

    #[test]
    fn test_extra_key_replaces_explicit_param() {
        let options = RequestOptions::new()
            .param("sort", "updated")
            .set("sort", "created")
            .into_send_options();
        assert_eq!(
            options.params,
            vec![("sort".to_string(), "created".to_string())]
        );
    }

    #[test]
    fn test_explicit_params_preserved_alongside_extras() {
        let options = RequestOptions::new()
            .param("state", "open")
            .set("sort", "created")
            .into_send_options();
        assert_eq!(options.params.len(), 2);
        assert_eq!(options.params[0], ("state".to_string(), "open".to_string()));
    }

    #[test]
    fn test_recognized_options_stay_out_of_params() {
        let options = RequestOptions::new()
            .header("accept", "application/vnd.github.v3+json")
            .json(serde_json::json!({"name": "test"}))
            .timeout(Duration::from_secs(5))
            .basic_auth("octocat", "secret")
            .into_send_options();
        assert!(options.params.is_empty());
        assert_eq!(options.headers.len(), 1);
        assert!(options.body.is_some());
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            options.auth,
            Some(Credentials {
                login: "octocat".to_string(),
                password: "secret".to_string()
            })
        );
    }
}
