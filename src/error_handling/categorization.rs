//! Mapping of recoverable errors to their statistics categories.

use super::types::ErrorType;
use crate::countries::ResolutionError;
use crate::geocode::GeocodeError;

/// Categorizes a geocoder failure for the run statistics.
pub fn categorize_geocode_error(error: &GeocodeError) -> ErrorType {
    match error {
        GeocodeError::Timeout => ErrorType::GeocodeTimeout,
        GeocodeError::Request(_) | GeocodeError::Status(_) => ErrorType::GeocodeRequestError,
        GeocodeError::NoMatch => ErrorType::GeocodeNoMatch,
    }
}

/// Categorizes a country/continent resolution failure for the run statistics.
pub fn categorize_resolution_error(error: &ResolutionError) -> ErrorType {
    match error {
        ResolutionError::UnknownCountry(_) => ErrorType::UnknownCountryCode,
        ResolutionError::UnknownContinent(_) => ErrorType::UnknownContinentCode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_error_categorization() {
        assert_eq!(
            categorize_geocode_error(&GeocodeError::Timeout),
            ErrorType::GeocodeTimeout
        );
        assert_eq!(
            categorize_geocode_error(&GeocodeError::NoMatch),
            ErrorType::GeocodeNoMatch
        );
        assert_eq!(
            categorize_geocode_error(&GeocodeError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE
            )),
            ErrorType::GeocodeRequestError
        );
    }

    #[test]
    fn test_resolution_error_categorization() {
        assert_eq!(
            categorize_resolution_error(&ResolutionError::UnknownCountry("XX".into())),
            ErrorType::UnknownCountryCode
        );
        assert_eq!(
            categorize_resolution_error(&ResolutionError::UnknownContinent("AQ".into())),
            ErrorType::UnknownContinentCode
        );
    }
}
