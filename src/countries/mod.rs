//! Country and continent resolution.
//!
//! Maps an ISO alpha-2 country code to a display name and a continent using
//! two embedded reference tables. Both lookups sit behind traits so tests
//! can substitute their own mappings.

mod continent;
mod registry;
mod table;

pub use continent::Continent;
pub use registry::{ContinentMap, CountryRegistry, IsoContinentMap, IsoCountryRegistry};

use thiserror::Error;

/// Error types for country/continent resolution.
///
/// Recoverable per-record: the caller logs the offending line and skips.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The code is not in the country registry.
    #[error("country code {0:?} is not in the registry")]
    UnknownCountry(String),

    /// The code has no continent assignment.
    #[error("country code {0:?} has no continent mapping")]
    UnknownContinent(String),
}
