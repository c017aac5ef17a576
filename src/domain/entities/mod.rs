//! Core resolution entities.
//!
//! All entities are transient: they are built per request and dropped once the
//! response is written.

pub mod decoding;
pub mod resolution;

pub use decoding::DecodingParameters;
pub use resolution::{BatchResult, MAX_BATCH_SIZE, ResolutionMethod, ResolutionResult};
