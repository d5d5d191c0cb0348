//! Country registry and continent mapping over the embedded tables.

use std::collections::HashMap;

use super::table::{COUNTRY_CONTINENTS, COUNTRY_NAMES};
use super::{Continent, ResolutionError};

/// Resolves an ISO alpha-2 country code to its display name.
pub trait CountryRegistry {
    /// Returns the display name for `code`.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::UnknownCountry` when the code is not in the
    /// registry.
    fn country_name(&self, code: &str) -> Result<&str, ResolutionError>;
}

/// Resolves an ISO alpha-2 country code to its continent.
pub trait ContinentMap {
    /// Returns the continent for `code`.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::UnknownContinent` when the code has no
    /// continent assignment.
    fn continent(&self, code: &str) -> Result<Continent, ResolutionError>;
}

/// Registry backed by the embedded ISO 3166-1 table.
pub struct IsoCountryRegistry {
    names: HashMap<&'static str, &'static str>,
}

impl IsoCountryRegistry {
    /// Builds the lookup index from the embedded table.
    pub fn new() -> Self {
        Self {
            names: COUNTRY_NAMES.iter().copied().collect(),
        }
    }
}

impl Default for IsoCountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryRegistry for IsoCountryRegistry {
    fn country_name(&self, code: &str) -> Result<&str, ResolutionError> {
        self.names
            .get(code)
            .copied()
            .ok_or_else(|| ResolutionError::UnknownCountry(code.to_string()))
    }
}

/// Continent mapping backed by the embedded table.
pub struct IsoContinentMap {
    continents: HashMap<&'static str, Continent>,
}

impl IsoContinentMap {
    /// Builds the lookup index from the embedded table.
    pub fn new() -> Self {
        Self {
            continents: COUNTRY_CONTINENTS.iter().copied().collect(),
        }
    }
}

impl Default for IsoContinentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinentMap for IsoContinentMap {
    fn continent(&self, code: &str) -> Result<Continent, ResolutionError> {
        self.continents
            .get(code)
            .copied()
            .ok_or_else(|| ResolutionError::UnknownContinent(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nigeria_resolves_to_africa() {
        let registry = IsoCountryRegistry::new();
        let continents = IsoContinentMap::new();
        assert_eq!(registry.country_name("NG").unwrap(), "Nigeria");
        assert_eq!(continents.continent("NG").unwrap(), Continent::Africa);
    }

    #[test]
    fn test_france_resolves_to_europe() {
        let registry = IsoCountryRegistry::new();
        let continents = IsoContinentMap::new();
        assert_eq!(registry.country_name("FR").unwrap(), "France");
        assert_eq!(continents.continent("FR").unwrap(), Continent::Europe);
    }

    #[test]
    fn test_unknown_country_code() {
        let registry = IsoCountryRegistry::new();
        let result = registry.country_name("XX");
        assert!(matches!(result, Err(ResolutionError::UnknownCountry(code)) if code == "XX"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The pipeline normalizes geocoder codes to upper case before lookup
        let registry = IsoCountryRegistry::new();
        assert!(registry.country_name("ng").is_err());
    }

    #[test]
    fn test_registered_but_unmapped_territory() {
        // Antarctica is in the registry but has no continent assignment in
        // the upstream mapping
        let registry = IsoCountryRegistry::new();
        let continents = IsoContinentMap::new();
        assert_eq!(registry.country_name("AQ").unwrap(), "Antarctica");
        assert!(matches!(
            continents.continent("AQ"),
            Err(ResolutionError::UnknownContinent(code)) if code == "AQ"
        ));
    }

    #[test]
    fn test_every_mapped_code_is_registered() {
        // The continent table must be a subset of the registry
        let registry = IsoCountryRegistry::new();
        for (code, _) in super::COUNTRY_CONTINENTS {
            assert!(
                registry.country_name(code).is_ok(),
                "{code} mapped to a continent but missing from the registry"
            );
        }
    }

    #[test]
    fn test_no_duplicate_codes() {
        let registry = IsoCountryRegistry::new();
        assert_eq!(registry.names.len(), super::COUNTRY_NAMES.len());
        let continents = IsoContinentMap::new();
        assert_eq!(continents.continents.len(), super::COUNTRY_CONTINENTS.len());
    }

    #[test]
    fn test_all_continents_reachable_except_antarctica() {
        // No country maps to Antarctica; the other six continents all appear
        let continents = IsoContinentMap::new();
        let mut seen = std::collections::HashSet::new();
        for (code, _) in super::COUNTRY_CONTINENTS {
            seen.insert(continents.continent(code).unwrap());
        }
        assert!(seen.contains(&Continent::Africa));
        assert!(seen.contains(&Continent::Asia));
        assert!(seen.contains(&Continent::Europe));
        assert!(seen.contains(&Continent::NorthAmerica));
        assert!(seen.contains(&Continent::Oceania));
        assert!(seen.contains(&Continent::SouthAmerica));
        assert!(!seen.contains(&Continent::Antarctica));
    }
}
