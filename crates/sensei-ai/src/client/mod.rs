//! HTTP client for the streaming review backend.
//!
//! Sends one `POST` per turn and decodes the SSE reply with
//! [`crate::streaming`]. The whole call, connect included, is bounded by the
//! configured timeout.

mod api;
mod config;


pub use api::ReviewClient;
pub use config::ReviewClientConfig;
