//! geo_sift library: streaming geo-filter over line-delimited JSON archives.
//!
//! This library streams a compressed archive of JSON records, reverse-geocodes
//! each geotagged record, tallies records per country, and collects the
//! records located in Africa. The filtered records are persisted to a binary
//! container at the end of the run.
//!
//! # Example
//!
//! ```no_run
//! use geo_sift::{Config, run_filter};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_file: std::path::PathBuf::from("posts.jsonl.zst"),
//!     ..Default::default()
//! };
//!
//! let report = run_filter(config).await?;
//! println!(
//!     "Saw {} records, {} geo-tagged, {} in Africa",
//!     report.records_seen, report.records_with_coordinates, report.matched_records
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Records are processed strictly
//! sequentially, so a `current_thread` runtime is sufficient.

#![warn(missing_docs)]

mod accumulate;
pub mod config;
pub mod countries;
mod error_handling;
pub mod geocode;
pub mod initialization;
mod input;
pub mod output;
pub mod record;
mod report;

// Re-export public API
pub use accumulate::RunCounters;
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_filter, run_filter_with, FilterReport};

// Internal run module (contains the main filtering logic)
mod run {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::accumulate::Accumulator;
    use crate::config::{Config, PROGRESS_LOG_INTERVAL};
    use crate::countries::{
        Continent, ContinentMap, CountryRegistry, IsoContinentMap, IsoCountryRegistry,
    };
    use crate::error_handling::{
        categorize_geocode_error, categorize_resolution_error, ErrorType, ProcessingStats,
    };
    use crate::geocode::{Geocoder, NominatimGeocoder};
    use crate::input::LineReader;
    use crate::output::write_container;
    use crate::record::Record;
    use crate::report::{log_progress, log_summary, print_error_statistics};

    /// Results of a filtering run.
    ///
    /// Contains summary statistics and metadata about the completed run.
    #[derive(Debug, Clone)]
    pub struct FilterReport {
        /// Number of lines that parsed as JSON records
        pub records_seen: usize,
        /// Number of parsed records carrying coordinates
        pub records_with_coordinates: usize,
        /// Number of records located on the target continent
        pub matched_records: usize,
        /// Records resolved per country, ordered by country name
        pub tally: BTreeMap<String, u64>,
        /// Path to the container holding the filtered records
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the geo-filter with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads records from
    /// the input file, reverse-geocodes each geotagged record against the
    /// configured endpoint, and persists the records located in Africa.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be initialized
    /// - The input file cannot be opened or its stream is corrupt
    /// - The output container cannot be written
    ///
    /// Per-record failures (malformed lines, geocode errors, unknown country
    /// codes) are logged, counted, and skipped; they never abort the run.
    pub async fn run_filter(config: Config) -> Result<FilterReport> {
        let geocoder =
            NominatimGeocoder::new(&config).context("Failed to initialize HTTP client")?;
        let countries = IsoCountryRegistry::new();
        let continents = IsoContinentMap::new();
        run_filter_with(config, &geocoder, &countries, &continents).await
    }

    /// Runs the geo-filter with injected geocoder and country lookups.
    ///
    /// `run_filter` wires in the real Nominatim client and the embedded ISO
    /// tables; tests inject stubs here to drive the pipeline offline.
    pub async fn run_filter_with<G, R, M>(
        config: Config,
        geocoder: &G,
        countries: &R,
        continents: &M,
    ) -> Result<FilterReport>
    where
        G: Geocoder,
        R: CountryRegistry,
        M: ContinentMap,
    {
        let mut reader =
            LineReader::open(&config.input_file).context("Failed to open input file")?;
        info!("Reading records from {}", config.input_file.display());

        let mut accumulator = Accumulator::new(Continent::Africa);
        let error_stats = ProcessingStats::new();
        let start_time = Instant::now();

        let pass_result = process_stream(
            &mut reader,
            geocoder,
            countries,
            continents,
            &mut accumulator,
            &error_stats,
            start_time,
        )
        .await;

        // The summary runs exactly once per run, also when the stream died
        // mid-pass. The output container is only written for a clean pass.
        let target = accumulator.target();
        let (counters, tally, kept) = accumulator.into_parts();
        log_summary(&counters, &tally, target);
        print_error_statistics(&error_stats);

        pass_result.context("Failed to read input stream")?;

        write_container(&config.output_file, &kept)
            .context("Failed to write output container")?;
        info!(
            "Wrote {} filtered records to {}",
            kept.len(),
            config.output_file.display()
        );

        Ok(FilterReport {
            records_seen: counters.records_seen,
            records_with_coordinates: counters.records_with_coordinates,
            matched_records: counters.matched_records,
            tally,
            output_path: config.output_file,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Streams the input to completion, resolving records one at a time.
    ///
    /// Returns `Err` only for fatal stream failures; the accumulator and the
    /// error statistics keep whatever was processed up to that point.
    async fn process_stream<G, R, M>(
        reader: &mut LineReader,
        geocoder: &G,
        countries: &R,
        continents: &M,
        accumulator: &mut Accumulator,
        error_stats: &ProcessingStats,
        start_time: Instant,
    ) -> Result<()>
    where
        G: Geocoder,
        R: CountryRegistry,
        M: ContinentMap,
    {
        while let Some(line) = reader.next_line()? {
            let record = match Record::parse(&line) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Could not decode line: {line}: {e}");
                    error_stats.increment_error(ErrorType::RecordParseError);
                    continue;
                }
            };

            accumulator.record_seen();
            let records_seen = accumulator.counters().records_seen;
            if records_seen % PROGRESS_LOG_INTERVAL == 0 {
                log_progress(start_time, records_seen);
            }

            let Some(coordinates) = record.coordinates() else {
                continue;
            };
            accumulator.record_with_coordinates();

            let geocoded = match geocoder.reverse(&coordinates).await {
                Ok(geocoded) => geocoded,
                Err(e) => {
                    warn!("Could not resolve location for record: {line}: {e}");
                    error_stats.increment_error(categorize_geocode_error(&e));
                    continue;
                }
            };

            let resolved = countries
                .country_name(&geocoded.country_code)
                .and_then(|name| {
                    continents
                        .continent(&geocoded.country_code)
                        .map(|continent| (name.to_string(), continent))
                });
            match resolved {
                Ok((country_name, continent)) => {
                    accumulator.observe(&country_name, continent, record);
                }
                Err(e) => {
                    warn!("Could not process record: {line}: {e}");
                    error_stats.increment_error(categorize_resolution_error(&e));
                }
            }
        }

        Ok(())
    }
}
