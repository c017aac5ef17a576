//! Resolution services for the application layer.

pub mod google_news;
pub mod resolution_service;
pub mod standard;

pub use google_news::GoogleNewsDecoder;
pub use resolution_service::{ResolutionService, ResolverSettings};
pub use standard::StandardResolver;
