//! Core types and foundational components
//!
//! This module contains the fundamental data types, error handling,
//! HTTP client construction and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod http;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{Result, SitemapProbeError};
pub use types::{SitemapDocument, ValidationResult, ValidationSummary};
