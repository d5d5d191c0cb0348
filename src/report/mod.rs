//! Progress and summary logging.

use std::collections::BTreeMap;
use std::time::Instant;

use log::info;
use strum::IntoEnumIterator;

use crate::accumulate::RunCounters;
use crate::countries::Continent;
use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs throughput since the start of the run.
pub fn log_progress(start_time: Instant, records_seen: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        records_seen as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} records in {:.2} seconds (~{:.2} records/sec)",
        records_seen, elapsed_secs, rate
    );
}

/// Logs the end-of-run summary: the three counters and the full tally.
///
/// Runs exactly once per run, also when the input stream was fatally
/// truncated mid-pass.
pub fn log_summary(counters: &RunCounters, tally: &BTreeMap<String, u64>, target: Continent) {
    info!(
        "There are {} records in this sample.",
        counters.records_seen
    );
    info!(
        "There are {} geo-tagged records in this sample.",
        counters.records_with_coordinates
    );
    if tally.is_empty() {
        info!("No records resolved to a country.");
    } else {
        info!("Records per country:");
        for (country, count) in tally {
            info!("   {}: {}", country, count);
        }
    }
    info!(
        "There are {} records geo-tagged in {} in this sample.",
        counters.matched_records, target
    );
}

/// Logs per-category error counts, skipping empty categories.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_summary_empty_run() {
        // Should not panic on an empty tally
        let counters = RunCounters::default();
        log_summary(&counters, &BTreeMap::new(), Continent::Africa);
    }

    #[test]
    fn test_log_summary_with_tally() {
        let counters = RunCounters {
            records_seen: 10,
            records_with_coordinates: 4,
            matched_records: 2,
        };
        let mut tally = BTreeMap::new();
        tally.insert("Nigeria".to_string(), 2u64);
        tally.insert("France".to_string(), 1u64);
        log_summary(&counters, &tally, Continent::Africa);
    }

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        // Should not panic when there are no errors
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_with_errors() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::GeocodeTimeout);
        stats.increment_error(ErrorType::RecordParseError);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_log_progress_zero_elapsed() {
        // Rate computation must not divide by zero
        log_progress(Instant::now(), 0);
        log_progress(Instant::now(), 100);
    }
}
