//! # igpanel-client - Backend Access
//!
//! Everything that talks to the automation backend over HTTP.
//!
//! ## Public API
//!
//! ### Log Stream (`stream`, `transport`, `sse`)
//! - [`StreamClient`] - Reconnecting log stream with ordered observer fan-out
//! - [`ConnectionState`] - Idle, connecting, open, pending retry, closed
//! - [`LogObserver`] - Callback receiving each log line
//! - [`LogTransport`] / [`HttpLogTransport`] - One connection's payload stream
//! - [`SseDecoder`] - Incremental `text/event-stream` parser
//!
//! ### Requests (`backend`, `gateway`, `protocol`)
//! - [`BackendClient`] - `reqwest` client bound to the server URL
//! - [`StatusSource`] / [`ActionTransport`] - Seams used by the app layer
//! - [`ActionGateway`] - Infallible action submission
//! - [`Endpoint`], [`ActionKind`], [`ActionRequest`] - Endpoint and body shapes
//!
//! ### Testing (`test_utils`, behind `test-helpers`)
//! - Scripted transports and status sources

pub mod backend;
pub mod gateway;
pub mod protocol;
pub mod sse;
pub mod stream;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{
    endpoint_url, parse_base_url, ActionTransport, BackendClient, StatusSource,
    DEFAULT_SERVER_URL,
};
pub use gateway::{ActionGateway, CONNECTION_ERROR_MESSAGE};
pub use protocol::{ActionInputs, ActionKind, ActionRequest, Endpoint};
pub use sse::SseDecoder;
pub use stream::{ConnectionState, LogObserver, StreamClient, StreamStats, RECONNECT_DELAY};
pub use transport::{HttpLogTransport, LogTransport, PayloadStream};
