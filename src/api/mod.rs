//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into resolution calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting, panic recovery, and tracing middleware
//! - [`routes`] - Resolution route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
