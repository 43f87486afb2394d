//! Audio encoder value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::ValidationError;

/// All symbolic audio encoders
pub const ALL_AUDIO_ENCODERS: &[AudioEncoder] = &[
    AudioEncoder::Default,
    AudioEncoder::AmrNb,
    AudioEncoder::AmrWb,
    AudioEncoder::Aac,
    AudioEncoder::HeAac,
    AudioEncoder::AacEld,
];

/// Platform-neutral audio codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioEncoder {
    #[default]
    Default,
    AmrNb,
    AmrWb,
    Aac,
    HeAac,
    AacEld,
}

impl AudioEncoder {
    /// Payload name of this encoder
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AmrNb => "amr_nb",
            Self::AmrWb => "amr_wb",
            Self::Aac => "aac",
            Self::HeAac => "he_aac",
            Self::AacEld => "aac_eld",
        }
    }

    pub(crate) fn expected() -> String {
        ALL_AUDIO_ENCODERS
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for AudioEncoder {
    type Err = ValidationError;

    // Symbolic names equal the wire names up to case, so one comparison covers both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_AUDIO_ENCODERS
            .iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "audioEncoder",
                value: s.to_string(),
                expected: Self::expected(),
            })
    }
}

impl fmt::Display for AudioEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AudioEncoder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
