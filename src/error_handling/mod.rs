//! Error categorization and per-run failure statistics.

mod categorization;
mod stats;
mod types;

pub use categorization::{categorize_geocode_error, categorize_resolution_error};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError};
