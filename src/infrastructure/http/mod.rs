//! Outbound HTTP client implementations.

pub mod reqwest_transport;

pub use reqwest_transport::{DEFAULT_USER_AGENT, ReqwestTransport};
