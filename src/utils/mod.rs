//! Pure helpers used by the resolution services.
//!
//! - [`url_classifier`] - Google News detection and article token extraction
//! - [`decoding_params`] - Signed attribute extraction from article HTML
//! - [`batchexecute`] - RPC envelope encoding and response decoding

pub mod batchexecute;
pub mod decoding_params;
pub mod url_classifier;
