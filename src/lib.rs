//! # URL Resolver
//!
//! A small HTTP service that resolves URLs to their final destination, built
//! with Axum and reqwest.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Resolution entities, errors, and the transport trait
//! - **Application Layer** ([`application`]) - Google News decoding, redirect
//!   following, strategy selection, and batches
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-backed HTTP transport
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Redirect following with final status reporting
//! - Google News article link decoding through the batchexecute RPC, with
//!   automatic fallback to redirect following
//! - Batch resolution of up to 10 URLs with per-URL failure isolation
//! - Rate limiting and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --port 5000
//! curl 'http://localhost:5000/resolve?url=https://example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Service name reported by the health and metadata endpoints.
pub const SERVICE_NAME: &str = "URL Resolver";

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolutionService, ResolverSettings};
    pub use crate::domain::entities::{ResolutionMethod, ResolutionResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ReqwestTransport;
    pub use crate::state::AppState;
}
