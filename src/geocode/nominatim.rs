//! Nominatim-backed reverse geocoder.
//!
//! Calls the OpenStreetMap Nominatim `/reverse` endpoint. Nominatim's usage
//! policy requires an identifying User-Agent and tolerates at most one
//! request at a time per client, which the strictly sequential pipeline
//! satisfies by construction.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{GeocodeError, GeocodeResult, Geocoder};
use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::record::Coordinates;

/// Subset of the Nominatim reverse-geocode response that we consume.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    #[serde(default)]
    country_code: Option<String>,
}

fn country_code_from(response: ReverseResponse) -> Result<GeocodeResult, GeocodeError> {
    let code = response
        .address
        .and_then(|address| address.country_code)
        .filter(|code| !code.is_empty())
        .ok_or(GeocodeError::NoMatch)?;
    Ok(GeocodeResult {
        country_code: code.to_ascii_uppercase(),
    })
}

/// Reverse geocoder backed by a Nominatim HTTP endpoint.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    /// Builds the HTTP client with the configured User-Agent and per-call
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot
    /// be constructed.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.geocoder_url.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, coordinates: &Coordinates) -> Result<GeocodeResult, GeocodeError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout
                } else {
                    GeocodeError::Request(e)
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let body: ReverseResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeocodeError::Timeout
            } else {
                GeocodeError::Request(e)
            }
        })?;

        country_code_from(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_response(body: &str) -> ReverseResponse {
        serde_json::from_str(body).expect("Should deserialize response")
    }

    #[test]
    fn test_country_code_extracted_and_uppercased() {
        // Nominatim reports country codes in lower case
        let response = parse_response(
            r#"{"place_id": 1, "address": {"country": "Nigeria", "country_code": "ng"}}"#,
        );
        let result = country_code_from(response).expect("Should resolve");
        assert_eq!(result.country_code, "NG");
    }

    #[test]
    fn test_missing_address_is_no_match() {
        // Open-ocean coordinates come back without an address block
        let response = parse_response(r#"{"error": "Unable to geocode"}"#);
        assert!(matches!(
            country_code_from(response),
            Err(GeocodeError::NoMatch)
        ));
    }

    #[test]
    fn test_address_without_country_code_is_no_match() {
        let response = parse_response(r#"{"address": {"city": "Somewhere"}}"#);
        assert!(matches!(
            country_code_from(response),
            Err(GeocodeError::NoMatch)
        ));
    }

    #[test]
    fn test_empty_country_code_is_no_match() {
        let response = parse_response(r#"{"address": {"country_code": ""}}"#);
        assert!(matches!(
            country_code_from(response),
            Err(GeocodeError::NoMatch)
        ));
    }

    #[test]
    fn test_client_construction() {
        let config = Config::default();
        assert!(NominatimGeocoder::new(&config).is_ok());
    }
}
