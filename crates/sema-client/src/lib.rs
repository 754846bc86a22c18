//! HTTP client for the Sema inference API.
//!
//! Two hosted operations, one POST each:
//! - `Client::route_intent` — match a free-text query against candidate routes
//! - `Client::extract_filter` — derive a boolean filter tree against a field schema
//!
//! Requests are validated locally before any network call; responses are
//! decoded into the typed model from `sema-protocol`. A synchronous facade
//! is available behind the `blocking` feature.

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod rest;

// Re-exports for convenience.
pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, StatusKind};
