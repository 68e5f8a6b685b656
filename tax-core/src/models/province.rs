use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A Canadian province or territory, identified by its two-letter CRA code.
///
/// Serializes as the two-letter code so it can be used directly as a map key
/// in `TaxData` documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "AB")]
    Alberta,
    #[serde(rename = "BC")]
    BritishColumbia,
    #[serde(rename = "MB")]
    Manitoba,
    #[serde(rename = "NB")]
    NewBrunswick,
    #[serde(rename = "NL")]
    NewfoundlandAndLabrador,
    #[serde(rename = "NS")]
    NovaScotia,
    #[serde(rename = "NT")]
    NorthwestTerritories,
    #[serde(rename = "NU")]
    Nunavut,
    #[serde(rename = "ON")]
    Ontario,
    #[serde(rename = "PE")]
    PrinceEdwardIsland,
    #[serde(rename = "QC")]
    Quebec,
    #[serde(rename = "SK")]
    Saskatchewan,
    #[serde(rename = "YT")]
    Yukon,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown province code '{0}'")]
pub struct ParseProvinceError(pub String);

impl Province {
    /// Every supported province and territory, in code order.
    pub const ALL: [Province; 13] = [
        Province::Alberta,
        Province::BritishColumbia,
        Province::Manitoba,
        Province::NewBrunswick,
        Province::NewfoundlandAndLabrador,
        Province::NovaScotia,
        Province::NorthwestTerritories,
        Province::Nunavut,
        Province::Ontario,
        Province::PrinceEdwardIsland,
        Province::Quebec,
        Province::Saskatchewan,
        Province::Yukon,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Alberta => "AB",
            Self::BritishColumbia => "BC",
            Self::Manitoba => "MB",
            Self::NewBrunswick => "NB",
            Self::NewfoundlandAndLabrador => "NL",
            Self::NovaScotia => "NS",
            Self::NorthwestTerritories => "NT",
            Self::Nunavut => "NU",
            Self::Ontario => "ON",
            Self::PrinceEdwardIsland => "PE",
            Self::Quebec => "QC",
            Self::Saskatchewan => "SK",
            Self::Yukon => "YT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alberta => "Alberta",
            Self::BritishColumbia => "British Columbia",
            Self::Manitoba => "Manitoba",
            Self::NewBrunswick => "New Brunswick",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::NovaScotia => "Nova Scotia",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::Nunavut => "Nunavut",
            Self::Ontario => "Ontario",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::Quebec => "Quebec",
            Self::Saskatchewan => "Saskatchewan",
            Self::Yukon => "Yukon",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Province {
    type Err = ParseProvinceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AB" => Ok(Self::Alberta),
            "BC" => Ok(Self::BritishColumbia),
            "MB" => Ok(Self::Manitoba),
            "NB" => Ok(Self::NewBrunswick),
            "NL" => Ok(Self::NewfoundlandAndLabrador),
            "NS" => Ok(Self::NovaScotia),
            "NT" => Ok(Self::NorthwestTerritories),
            "NU" => Ok(Self::Nunavut),
            "ON" => Ok(Self::Ontario),
            "PE" => Ok(Self::PrinceEdwardIsland),
            "QC" => Ok(Self::Quebec),
            "SK" => Ok(Self::Saskatchewan),
            "YT" => Ok(Self::Yukon),
            _ => Err(ParseProvinceError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_lowercase_codes() {
        assert_eq!("on".parse::<Province>(), Ok(Province::Ontario));
        assert_eq!("bc".parse::<Province>(), Ok(Province::BritishColumbia));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(
            "XX".parse::<Province>(),
            Err(ParseProvinceError("XX".to_string()))
        );
    }

    #[test]
    fn code_round_trips_for_all_provinces() {
        for province in Province::ALL {
            assert_eq!(province.code().parse::<Province>(), Ok(province));
        }
    }
}
