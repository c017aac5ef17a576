//! Domain layer containing resolution entities and the outbound transport contract.
//!
//! This module is independent of the HTTP framework and of any concrete HTTP
//! client. It defines what a resolution produces and what the resolution engine
//! needs from the network.
//!
//! # Architecture
//!
//! - [`entities`] - Resolution results, methods, and Google News decoding parameters
//! - [`transport`] - The [`transport::HttpTransport`] trait used by every strategy
//! - [`error`] - Typed failures raised at each resolution stage
//!
//! # Resolution Flow
//!
//! 1. [`crate::utils::url_classifier`] decides whether a URL is a Google News link
//! 2. [`crate::application::services::GoogleNewsDecoder`] exchanges the article token
//! 3. [`crate::application::services::StandardResolver`] follows redirects otherwise,
//!    or when decoding fails

pub mod entities;
pub mod error;
pub mod transport;
