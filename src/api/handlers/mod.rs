//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod metrics;
pub mod resolve;
pub mod resolve_batch;

pub use fallback::not_found_handler;
pub use health::{health_handler, service_info_handler};
pub use metrics::metrics_handler;
pub use resolve::resolve_handler;
pub use resolve_batch::resolve_batch_handler;
