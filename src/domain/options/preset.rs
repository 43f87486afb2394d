//! Recording preset value object

use std::fmt;
use std::str::FromStr;

use super::{AudioEncoder, OutputFormat, RecordingOptions};
use crate::domain::error::{InvalidPresetError, ValidationError};

/// All available presets
pub const ALL_PRESETS: &[RecordingPreset] =
    &[RecordingPreset::HighQuality, RecordingPreset::LowQuality];

/// Ready-made option sets for common recording needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordingPreset {
    #[default]
    HighQuality,
    LowQuality,
}

impl RecordingPreset {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighQuality => "high_quality",
            Self::LowQuality => "low_quality",
        }
    }

    /// Get the human-readable label for this preset
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighQuality => "AAC in MPEG-4, 44.1 kHz stereo, 128 kbps",
            Self::LowQuality => "AMR-NB in 3GP, 44.1 kHz stereo, 64 kbps",
        }
    }

    /// Build the options this preset stands for
    pub fn options(&self) -> Result<RecordingOptions, ValidationError> {
        let builder = match self {
            Self::HighQuality => RecordingOptions::builder(".m4a")
                .bit_rate(128_000)
                .output_format(OutputFormat::Mpeg4)
                .audio_encoder(AudioEncoder::Aac),
            Self::LowQuality => RecordingOptions::builder(".3gp")
                .bit_rate(64_000)
                .output_format(OutputFormat::ThreeGp)
                .audio_encoder(AudioEncoder::AmrNb),
        };

        builder.sample_rate(44_100.0).number_of_channels(2).build()
    }
}

impl FromStr for RecordingPreset {
    type Err = InvalidPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "high_quality" => Ok(Self::HighQuality),
            "low_quality" => Ok(Self::LowQuality),
            _ => Err(InvalidPresetError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for RecordingPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_presets() {
        assert_eq!(
            "high_quality".parse::<RecordingPreset>().unwrap(),
            RecordingPreset::HighQuality
        );
        assert_eq!("LOW-QUALITY".parse::<RecordingPreset>().unwrap(), RecordingPreset::LowQuality);
        assert!("medium".parse::<RecordingPreset>().is_err());
    }

    #[test]
    fn every_preset_builds() {
        for preset in ALL_PRESETS {
            assert!(preset.options().is_ok());
        }
    }

    #[test]
    fn high_quality_values() {
        let options = RecordingPreset::HighQuality.options().unwrap();
        assert_eq!(options.extension(), ".m4a");
        assert_eq!(options.sample_rate(), Some(44_100.0));
        assert_eq!(options.number_of_channels().map(|c| c.get()), Some(2));
        assert_eq!(options.bit_rate().map(|b| b.get()), Some(128_000));
        assert_eq!(options.output_format(), Some(OutputFormat::Mpeg4));
        assert_eq!(options.audio_encoder(), Some(AudioEncoder::Aac));
    }

    #[test]
    fn low_quality_values() {
        let options = RecordingPreset::LowQuality.options().unwrap();
        assert_eq!(options.extension(), ".3gp");
        assert_eq!(options.bit_rate().map(|b| b.get()), Some(64_000));
        assert_eq!(options.output_format(), Some(OutputFormat::ThreeGp));
        assert_eq!(options.audio_encoder(), Some(AudioEncoder::AmrNb));
    }
}
