//! Request/response access to the backend
//!
//! [`BackendClient`] wraps a `reqwest::Client` bound to the server's base
//! URL. The status poller and the action gateway only see it through the
//! [`StatusSource`] and [`ActionTransport`] traits.

use std::time::Duration;

use igpanel_core::prelude::*;
use igpanel_core::{ActionOutcome, StatusResponse};
use serde_json::Value;
use url::Url;

use crate::protocol::Endpoint;
use crate::transport::HttpLogTransport;

/// Default backend address
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Connect timeout shared by all requests, including the long-lived stream
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of `/api/status` reports
#[trait_variant::make(StatusSource: Send)]
pub trait LocalStatusSource {
    async fn fetch_status(&self) -> Result<StatusResponse>;
}

/// Sink for action POSTs
#[trait_variant::make(ActionTransport: Send)]
pub trait LocalActionTransport {
    async fn post_action(&self, endpoint: Endpoint, body: &Value) -> Result<ActionOutcome>;
}

/// Parse and validate a server base URL
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::invalid_url(raw, "expected an http:// or https:// address"));
    }
    Ok(url)
}

/// Resolve an endpoint against a base URL, keeping any path prefix of the base
pub fn endpoint_url(base: &Url, endpoint: Endpoint) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(endpoint.path().trim_start_matches('/'))
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    /// Build a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Transport for the log stream of the same server
    pub fn log_transport(&self) -> Result<HttpLogTransport> {
        HttpLogTransport::new(endpoint_url(&self.base, Endpoint::Logs)?)
    }
}

impl StatusSource for BackendClient {
    async fn fetch_status(&self) -> Result<StatusResponse> {
        let url = endpoint_url(&self.base, Endpoint::Status)?;
        trace!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<StatusResponse>()
            .await
            .map_err(|e| Error::protocol(format!("invalid status body: {}", e)))
    }
}

impl ActionTransport for BackendClient {
    async fn post_action(&self, endpoint: Endpoint, body: &Value) -> Result<ActionOutcome> {
        let url = endpoint_url(&self.base, endpoint)?;
        debug!("POST {} {}", url, body);

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        match serde_json::from_slice::<ActionOutcome>(&bytes) {
            Ok(outcome) => {
                if !status.is_success() {
                    debug!("{} answered HTTP {} with a result body", endpoint.path(), status);
                }
                Ok(outcome)
            }
            Err(_) if !status.is_success() => Err(Error::HttpStatus {
                status: status.as_u16(),
            }),
            Err(e) => Err(Error::protocol(format!("invalid action body: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("http://localhost:5000").is_ok());
        assert!(parse_base_url(" https://panel.example.com/ ").is_ok());
        assert!(parse_base_url("localhost:5000").is_err());
        assert!(parse_base_url("ftp://host").is_err());
        assert!(parse_base_url("").is_err());
    }

    #[test]
    fn test_endpoint_url_on_root() {
        let base = parse_base_url("http://localhost:5000").unwrap();
        let url = endpoint_url(&base, Endpoint::Status).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/status");
    }

    #[test]
    fn test_endpoint_url_keeps_prefix() {
        let base = parse_base_url("http://host/panel").unwrap();
        let url = endpoint_url(&base, Endpoint::CommentAi).unwrap();
        assert_eq!(url.as_str(), "http://host/panel/api/comment-ai");

        let base = parse_base_url("http://host/panel/").unwrap();
        let url = endpoint_url(&base, Endpoint::Logs).unwrap();
        assert_eq!(url.as_str(), "http://host/panel/api/logs");
    }

    #[test]
    fn test_client_rejects_bad_url() {
        let err = BackendClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(!err.is_recoverable());
    }
}
