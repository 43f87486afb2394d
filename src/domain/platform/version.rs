//! Platform version value object

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::InvalidPlatformVersionError;

/// API level of the running platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlatformVersion(u32);

impl PlatformVersion {
    /// Android 8.0 (Oreo), API level 26
    pub const OREO: Self = Self(26);

    /// Newest API level this crate has constant tables for
    pub const LATEST_KNOWN: Self = Self(35);

    pub const fn new(api_level: u32) -> Self {
        Self(api_level)
    }

    pub const fn api_level(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PlatformVersion {
    fn from(api_level: u32) -> Self {
        Self(api_level)
    }
}

impl FromStr for PlatformVersion {
    type Err = InvalidPlatformVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(level) if level > 0 => Ok(Self(level)),
            _ => Err(InvalidPlatformVersionError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for PlatformVersion {
    fn default() -> Self {
        Self::LATEST_KNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_api_level() {
        assert_eq!("26".parse::<PlatformVersion>().unwrap(), PlatformVersion::OREO);
        assert_eq!(" 33 ".parse::<PlatformVersion>().unwrap().api_level(), 33);
    }

    #[test]
    fn parse_invalid() {
        assert!("0".parse::<PlatformVersion>().is_err());
        assert!("-1".parse::<PlatformVersion>().is_err());
        assert!("oreo".parse::<PlatformVersion>().is_err());
        assert!("".parse::<PlatformVersion>().is_err());
    }

    #[test]
    fn ordering_follows_api_level() {
        assert!(PlatformVersion::new(25) < PlatformVersion::OREO);
        assert!(PlatformVersion::LATEST_KNOWN > PlatformVersion::OREO);
    }

    #[test]
    fn default_is_latest_known() {
        assert_eq!(PlatformVersion::default(), PlatformVersion::LATEST_KNOWN);
    }
}
