//! Audio source value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::ValidationError;

/// All symbolic audio sources
pub const ALL_RECORDING_SOURCES: &[RecordingSource] = &[
    RecordingSource::Camcorder,
    RecordingSource::Default,
    RecordingSource::Mic,
    RecordingSource::RemoteSubmix,
    RecordingSource::Unprocessed,
    RecordingSource::VoiceCall,
    RecordingSource::VoiceCommunication,
    RecordingSource::VoiceDownlink,
    RecordingSource::VoicePerformance,
    RecordingSource::VoiceRecognition,
    RecordingSource::VoiceUplink,
];

/// Input the recorder captures from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordingSource {
    Camcorder,
    Default,
    #[default]
    Mic,
    RemoteSubmix,
    Unprocessed,
    VoiceCall,
    VoiceCommunication,
    VoiceDownlink,
    VoicePerformance,
    VoiceRecognition,
    VoiceUplink,
}

impl RecordingSource {
    /// Payload name of this source
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Camcorder => "camcorder",
            Self::Default => "default",
            Self::Mic => "mic",
            Self::RemoteSubmix => "remote_submix",
            Self::Unprocessed => "unprocessed",
            Self::VoiceCall => "voice_call",
            Self::VoiceCommunication => "voice_communication",
            Self::VoiceDownlink => "voice_downlink",
            Self::VoicePerformance => "voice_performance",
            Self::VoiceRecognition => "voice_recognition",
            Self::VoiceUplink => "voice_uplink",
        }
    }

    pub(crate) fn expected() -> String {
        ALL_RECORDING_SOURCES
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for RecordingSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_RECORDING_SOURCES
            .iter()
            .copied()
            .find(|source| source.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "audioSource",
                value: s.to_string(),
                expected: Self::expected(),
            })
    }
}

impl fmt::Display for RecordingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RecordingSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
