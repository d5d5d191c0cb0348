//! Per-category error counting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Counts recoverable per-record failures by category.
///
/// All categories are initialized to zero on creation, so incrementing can
/// never miss a key during the run.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every category at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all categories.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = ProcessingStats::new();
        assert_eq!(stats.total_errors(), 0);
        for error in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error), 0);
        }
    }

    #[test]
    fn test_increment_and_read_back() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::GeocodeTimeout);
        stats.increment_error(ErrorType::GeocodeTimeout);
        stats.increment_error(ErrorType::RecordParseError);

        assert_eq!(stats.get_error_count(ErrorType::GeocodeTimeout), 2);
        assert_eq!(stats.get_error_count(ErrorType::RecordParseError), 1);
        assert_eq!(stats.get_error_count(ErrorType::GeocodeNoMatch), 0);
        assert_eq!(stats.total_errors(), 3);
    }
}
