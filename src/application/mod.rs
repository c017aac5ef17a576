//! Application layer services implementing the resolution engine.
//!
//! Services depend only on the [`crate::domain::transport::HttpTransport`]
//! trait, never on a concrete HTTP client.
//!
//! # Available Services
//!
//! - [`services::google_news::GoogleNewsDecoder`] - Two-step Google News token decoding
//! - [`services::standard::StandardResolver`] - Redirect following
//! - [`services::resolution_service::ResolutionService`] - Strategy selection and batches

pub mod services;
