//! Result aggregation and logging
//!
//! This module collects per-URL validation results into a summary,
//! notifies progress observers, and holds the structured logging helpers.

pub mod logging;
pub mod summary;

// Re-export commonly used items
pub use summary::{Aggregator, ProgressObserver};
