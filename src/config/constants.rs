//! Configuration constants.

/// Default path for the output container when `--output-file` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "africa_records.bin";

/// Default reverse-geocoding endpoint (Nominatim).
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Default User-Agent sent to the geocoder. Nominatim rejects requests
/// without an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!("geo_sift/", env!("CARGO_PKG_VERSION"));

/// Default per-call geocoder timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Log a throughput line every this many parsed records.
pub const PROGRESS_LOG_INTERVAL: usize = 1_000;
