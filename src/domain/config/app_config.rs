//! Application configuration value object

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::options::{RecordingPreset, RecordingSource};
use crate::domain::platform::PlatformVersion;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub platform_version: Option<u32>,
    pub preset: Option<String>,
    pub audio_source: Option<String>,
    pub metering: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            platform_version: Some(PlatformVersion::LATEST_KNOWN.api_level()),
            preset: None,
            audio_source: Some(RecordingSource::default().as_str().to_string()),
            metering: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            platform_version: other.platform_version.or(self.platform_version),
            preset: other.preset.or(self.preset),
            audio_source: other.audio_source.or(self.audio_source),
            metering: other.metering.or(self.metering),
        }
    }

    /// Get platform version, or the newest known one if not set/zero
    pub fn platform_version_or_default(&self) -> PlatformVersion {
        self.platform_version
            .filter(|level| *level > 0)
            .map(PlatformVersion::new)
            .unwrap_or_default()
    }

    /// Get preset as parsed RecordingPreset; None if not set or invalid
    pub fn preset(&self) -> Option<RecordingPreset> {
        parse_stored("preset", self.preset.as_deref())
    }

    /// Get audio source, or mic if not set/invalid
    pub fn audio_source_or_default(&self) -> RecordingSource {
        parse_stored("audio_source", self.audio_source.as_deref()).unwrap_or_default()
    }

    /// Get metering setting, or false if not set
    pub fn metering_or_default(&self) -> bool {
        self.metering.unwrap_or(false)
    }
}

/// Parse a stored string value. Invalid values are logged and ignored.
fn parse_stored<T>(key: &str, value: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value?.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring invalid config value");
            None
        }
    }
}
