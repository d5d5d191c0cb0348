//! Error type definitions.
//!
//! This module defines the initialization errors and the per-record error
//! categories tracked during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of recoverable per-record failures.
///
/// Every variant corresponds to a log-and-skip event; counts are reported in
/// the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The line did not parse as a JSON object.
    RecordParseError,
    /// The geocoder call exceeded its timeout.
    GeocodeTimeout,
    /// The geocoder call failed at the transport or HTTP level.
    GeocodeRequestError,
    /// The geocoder resolved no country for the coordinates.
    GeocodeNoMatch,
    /// The geocoded country code is not in the country registry.
    UnknownCountryCode,
    /// The geocoded country code has no continent mapping.
    UnknownContinentCode,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RecordParseError => "Record parse error",
            ErrorType::GeocodeTimeout => "Geocode timeout",
            ErrorType::GeocodeRequestError => "Geocode request error",
            ErrorType::GeocodeNoMatch => "Geocode no match",
            ErrorType::UnknownCountryCode => "Unknown country code",
            ErrorType::UnknownContinentCode => "Unknown continent code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::RecordParseError.as_str(), "Record parse error");
        assert_eq!(ErrorType::GeocodeTimeout.as_str(), "Geocode timeout");
        assert_eq!(
            ErrorType::UnknownContinentCode.as_str(),
            "Unknown continent code"
        );
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        // Verify all error types have non-empty string representations
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        for error_type in ErrorType::iter() {
            assert_eq!(error_type.to_string(), error_type.as_str());
        }
    }
}
