use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform regions accepted by the service, keyed by their public code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Tr,
    Ru,
    Pbe,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Self::Br,
        Self::Eune,
        Self::Euw,
        Self::Jp,
        Self::Kr,
        Self::Lan,
        Self::Las,
        Self::Na,
        Self::Oce,
        Self::Tr,
        Self::Ru,
        Self::Pbe,
    ];

    /// User-facing region code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Br => "BR",
            Self::Eune => "EUNE",
            Self::Euw => "EUW",
            Self::Jp => "JP",
            Self::Kr => "KR",
            Self::Lan => "LAN",
            Self::Las => "LAS",
            Self::Na => "NA",
            Self::Oce => "OCE",
            Self::Tr => "TR",
            Self::Ru => "RU",
            Self::Pbe => "PBE",
        }
    }

    /// Platform routing value substituted into upstream URLs.
    pub fn routing_token(&self) -> &'static str {
        match self {
            Self::Br => "br1",
            Self::Eune => "eun1",
            Self::Euw => "euw1",
            Self::Jp => "jp1",
            Self::Kr => "kr1",
            Self::Lan => "la1",
            Self::Las => "la2",
            Self::Na => "na1",
            Self::Oce => "oc1",
            Self::Tr => "tr1",
            Self::Ru => "ru",
            Self::Pbe => "pbe1",
        }
    }

    /// Every valid code, sorted, for error messages.
    pub fn valid_codes() -> Vec<&'static str> {
        let mut codes: Vec<_> = Self::ALL.iter().map(Region::code).collect();
        codes.sort_unstable();
        codes
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code() == s)
            .ok_or_else(|| AppError::InvalidRegion {
                region: s.to_string(),
                valid: Self::valid_codes().join(", "),
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
