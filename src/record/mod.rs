//! Schema-free input records.
//!
//! Each input line is an arbitrary JSON object. Only the
//! `coordinates.coordinates` field is ever interpreted; everything else is
//! preserved verbatim and carried through to the output container untouched.

use serde_json::Value;
use thiserror::Error;

/// Error types for record parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The line is not valid JSON.
    #[error("line is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The line parsed, but the top level is not an object.
    #[error("line is not a JSON object")]
    NotAnObject,
}

/// A longitude/latitude pair extracted from a record.
///
/// The wire order is `[longitude, latitude]`, matching the input format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

/// One parsed input record.
///
/// Wraps the raw JSON value; fields other than `coordinates` are opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    value: Value,
}

impl Record {
    /// Parses one raw input line into a `Record`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for invalid JSON or a non-object top level. The
    /// caller logs the offending line and skips it; parse failures never
    /// abort the run.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(line)?;
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        Ok(Self { value })
    }

    /// Rebuilds a record from an already-parsed JSON value.
    ///
    /// Used when reading records back out of the output container.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NotAnObject` if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        Ok(Self { value })
    }

    /// Returns the geotag if the record carries a usable one.
    ///
    /// `Some` only when `coordinates.coordinates` is a two-element numeric
    /// array. Absence is not an error -- most records are not geotagged. A
    /// null or malformed `coordinates` field is treated the same as a
    /// missing one.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let pair = self
            .value
            .get("coordinates")?
            .get("coordinates")?
            .as_array()?;
        if pair.len() != 2 {
            return None;
        }
        Some(Coordinates {
            longitude: pair[0].as_f64()?,
            latitude: pair[1].as_f64()?,
        })
    }

    /// Serializes the record back to compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.value.to_string()
    }

    /// Borrows the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_record() {
        let record = Record::parse(r#"{"id": 42, "text": "hello"}"#).expect("Should parse");
        assert_eq!(record.as_value()["id"], 42);
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = Record::parse("{not json");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_non_object() {
        // Arrays and scalars parse as JSON but are not records
        assert!(matches!(
            Record::parse("[1, 2, 3]"),
            Err(ParseError::NotAnObject)
        ));
        assert!(matches!(
            Record::parse("\"just a string\""),
            Err(ParseError::NotAnObject)
        ));
        assert!(matches!(Record::parse("42"), Err(ParseError::NotAnObject)));
    }

    #[test]
    fn test_parse_empty_line() {
        // A blank line is malformed input, not a silent skip
        assert!(matches!(Record::parse(""), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_coordinates_extraction() {
        let record = Record::parse(
            r#"{"id": 1, "coordinates": {"type": "Point", "coordinates": [7.49, 9.06]}}"#,
        )
        .expect("Should parse");
        let coordinates = record.coordinates().expect("Should have coordinates");
        assert_eq!(coordinates.longitude, 7.49);
        assert_eq!(coordinates.latitude, 9.06);
    }

    #[test]
    fn test_coordinates_null_treated_as_absent() {
        // Real archives carry "coordinates": null on most records
        let record = Record::parse(r#"{"id": 1, "coordinates": null}"#).expect("Should parse");
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_coordinates_wrong_arity_treated_as_absent() {
        let record = Record::parse(r#"{"coordinates": {"coordinates": [7.49]}}"#)
            .expect("Should parse");
        assert!(record.coordinates().is_none());

        let record = Record::parse(r#"{"coordinates": {"coordinates": [1.0, 2.0, 3.0]}}"#)
            .expect("Should parse");
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_coordinates_non_numeric_treated_as_absent() {
        let record = Record::parse(r#"{"coordinates": {"coordinates": ["7.49", "9.06"]}}"#)
            .expect("Should parse");
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_unrelated_fields_preserved() {
        let line = r#"{"id":7,"user":{"name":"a"},"coordinates":{"coordinates":[2.3522,48.8566]}}"#;
        let record = Record::parse(line).expect("Should parse");
        let round_tripped: Value =
            serde_json::from_str(&record.to_json_string()).expect("Should re-parse");
        assert_eq!(round_tripped, json!(serde_json::from_str::<Value>(line).unwrap()));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(Record::from_value(json!([1, 2])).is_err());
        assert!(Record::from_value(json!({"ok": true})).is_ok());
    }
}
