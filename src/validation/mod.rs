//! URL validation logic
//!
//! This module probes page URLs with HTTP HEAD requests and runs
//! those probes in bounded, ordered batches.

pub mod batch;
pub mod validator;

// Re-export commonly used items
pub use batch::BatchValidator;
pub use validator::{HttpProber, ProbeUrl, matches_content_type};
