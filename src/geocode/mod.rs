//! Reverse geocoding.
//!
//! The geocoder is the pipeline's external collaborator: one blocking network
//! round-trip per geotagged record, no retry, no backoff, no cache. It is a
//! trait so tests can substitute a deterministic stub for the live service.

mod nominatim;

pub use nominatim::NominatimGeocoder;

use async_trait::async_trait;
use thiserror::Error;

use crate::record::Coordinates;

/// Error types for a single geocoder call.
///
/// All variants are recoverable per-record: the caller logs the offending
/// line and skips the record.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The call exceeded the configured timeout.
    #[error("geocoder call timed out")]
    Timeout,

    /// Transport-level failure (connect, TLS, malformed response body).
    #[error("geocoder request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("geocoder returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The service answered but resolved no country for the coordinates.
    #[error("no country match for coordinates")]
    NoMatch,
}

/// Address metadata from a successful reverse-geocode call.
///
/// Only the country code is consumed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeResult {
    /// ISO alpha-2 country code, normalized to upper case.
    pub country_code: String,
}

/// Resolves a coordinate pair to address metadata via an external service.
#[async_trait]
pub trait Geocoder {
    /// Performs one reverse-geocode lookup.
    async fn reverse(&self, coordinates: &Coordinates) -> Result<GeocodeResult, GeocodeError>;
}
