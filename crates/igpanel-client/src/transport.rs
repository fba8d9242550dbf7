//! Log stream transports
//!
//! A transport opens one connection and hands back the `data` payloads of
//! that connection as a stream. Reconnecting is the stream client's job.

use futures_util::stream::BoxStream;
use igpanel_core::prelude::*;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use url::Url;

use crate::backend::CONNECT_TIMEOUT;
use crate::sse;

/// Payloads of one open connection; the stream ends when the connection does
pub type PayloadStream = BoxStream<'static, Result<String>>;

#[trait_variant::make(LogTransport: Send)]
pub trait LocalLogTransport {
    /// Open a new connection
    async fn connect(&self) -> Result<PayloadStream>;

    /// Human-readable target for diagnostics
    fn describe(&self) -> String;
}

/// `text/event-stream` transport over HTTP
#[derive(Debug, Clone)]
pub struct HttpLogTransport {
    http: reqwest::Client,
    url: Url,
}

impl HttpLogTransport {
    /// The stream is long-lived, so only connecting is bounded in time
    pub fn new(url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl LogTransport for HttpLogTransport {
    async fn connect(&self) -> Result<PayloadStream> {
        let response = self
            .http
            .get(self.url.clone())
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| Error::stream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(sse::data_stream(response.bytes_stream()))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
