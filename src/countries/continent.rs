//! Continent classification.

use std::fmt;

use super::ResolutionError;

/// The seven continents, identified by their two-letter codes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Continent {
    /// The two-letter continent code ("AF" for Africa, and so on).
    pub fn code(self) -> &'static str {
        match self {
            Self::Africa => "AF",
            Self::Antarctica => "AN",
            Self::Asia => "AS",
            Self::Europe => "EU",
            Self::NorthAmerica => "NA",
            Self::Oceania => "OC",
            Self::SouthAmerica => "SA",
        }
    }

    /// Human-readable continent name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Antarctica => "Antarctica",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
        }
    }
}

impl<'a> TryFrom<&'a str> for Continent {
    type Error = ResolutionError;

    fn try_from(s: &'a str) -> Result<Self, ResolutionError> {
        match s.trim() {
            "AF" => Ok(Self::Africa),
            "AN" => Ok(Self::Antarctica),
            "AS" => Ok(Self::Asia),
            "EU" => Ok(Self::Europe),
            "NA" => Ok(Self::NorthAmerica),
            "OC" => Ok(Self::Oceania),
            "SA" => Ok(Self::SouthAmerica),
            other => Err(ResolutionError::UnknownContinent(other.to_string())),
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for continent in [
            Continent::Africa,
            Continent::Antarctica,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::Oceania,
            Continent::SouthAmerica,
        ] {
            assert_eq!(Continent::try_from(continent.code()).unwrap(), continent);
        }
    }

    #[test]
    fn test_africa_sentinel() {
        assert_eq!(Continent::Africa.code(), "AF");
        assert_eq!(Continent::Africa.to_string(), "Africa");
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(Continent::try_from("XX").is_err());
        assert!(Continent::try_from("").is_err());
    }
}
