//! # igpanel-core - Core Domain Types
//!
//! Foundation crate for igpanel. Provides domain types, the log line
//! classifier, backend wire payloads, the clock abstraction, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LogEntry`] - A classified backend log line with id and timestamp
//! - [`Severity`] - Display severity (success, error, warning, info, neutral)
//! - [`InitState`] - Initialization outcome seen on the init page
//! - [`Page`] - Screens of the panel and their routes
//! - [`AccountStatus`], [`AccountStatusSnapshot`] - Account list from the backend
//!
//! ### Classification (`classify`)
//! - [`classify()`] - Marker-priority severity classification
//!
//! ### Wire Payloads (`events`)
//! - [`StreamMessage`] - One log stream payload
//! - [`StatusResponse`] - `/api/status` body
//! - [`ActionOutcome`] - `{success, message}` action response
//!
//! ### Time (`clock`)
//! - [`Clock`], [`SystemClock`], [`ManualClock`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; network errors are `recoverable`
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use igpanel_core::prelude::*;
//! ```

pub mod classify;
pub mod clock;
pub mod error;
pub mod events;
pub mod logging;
pub mod prelude;
pub mod types;

pub use classify::classify;
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use error::{Error, Result};
pub use events::{ActionOutcome, StatusResponse, StreamMessage};
pub use types::{AccountStatus, AccountStatusSnapshot, InitState, LogEntry, Page, Severity};
