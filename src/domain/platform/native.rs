//! Native recorder constants and symbolic-to-native lookup tables
//!
//! Values follow the Android `MediaRecorder` constant space.

use crate::domain::options::{AudioEncoder, OutputFormat, RecordingSource};

/// Numeric identifier understood by the native recorder
pub type NativeConstant = i32;

/// `MediaRecorder.OutputFormat`
pub mod output_format {
    use super::NativeConstant;

    pub const DEFAULT: NativeConstant = 0;
    pub const THREE_GPP: NativeConstant = 1;
    pub const MPEG_4: NativeConstant = 2;
    pub const AMR_NB: NativeConstant = 3;
    pub const AMR_WB: NativeConstant = 4;
    pub const AAC_ADTS: NativeConstant = 6;
    /// Only available from API level 26
    pub const MPEG_2_TS: NativeConstant = 8;
    pub const WEBM: NativeConstant = 9;
}

/// `MediaRecorder.AudioEncoder`
pub mod audio_encoder {
    use super::NativeConstant;

    pub const DEFAULT: NativeConstant = 0;
    pub const AMR_NB: NativeConstant = 1;
    pub const AMR_WB: NativeConstant = 2;
    pub const AAC: NativeConstant = 3;
    pub const HE_AAC: NativeConstant = 4;
    pub const AAC_ELD: NativeConstant = 5;
}

/// `MediaRecorder.AudioSource`
pub mod audio_source {
    use super::NativeConstant;

    pub const DEFAULT: NativeConstant = 0;
    pub const MIC: NativeConstant = 1;
    pub const VOICE_UPLINK: NativeConstant = 2;
    pub const VOICE_DOWNLINK: NativeConstant = 3;
    pub const VOICE_CALL: NativeConstant = 4;
    pub const CAMCORDER: NativeConstant = 5;
    pub const VOICE_RECOGNITION: NativeConstant = 6;
    pub const VOICE_COMMUNICATION: NativeConstant = 7;
    pub const REMOTE_SUBMIX: NativeConstant = 8;
    pub const UNPROCESSED: NativeConstant = 9;
    pub const VOICE_PERFORMANCE: NativeConstant = 10;
}

/// Version-independent container formats.
/// Formats with a version gate (see `gating`) are deliberately absent.
pub const OUTPUT_FORMAT_TABLE: &[(OutputFormat, NativeConstant)] = &[
    (OutputFormat::Default, output_format::DEFAULT),
    (OutputFormat::ThreeGp, output_format::THREE_GPP),
    (OutputFormat::Mpeg4, output_format::MPEG_4),
    (OutputFormat::AmrNb, output_format::AMR_NB),
    (OutputFormat::AmrWb, output_format::AMR_WB),
    (OutputFormat::AacAdts, output_format::AAC_ADTS),
    (OutputFormat::Webm, output_format::WEBM),
];

pub const AUDIO_ENCODER_TABLE: &[(AudioEncoder, NativeConstant)] = &[
    (AudioEncoder::Default, audio_encoder::DEFAULT),
    (AudioEncoder::AmrNb, audio_encoder::AMR_NB),
    (AudioEncoder::AmrWb, audio_encoder::AMR_WB),
    (AudioEncoder::Aac, audio_encoder::AAC),
    (AudioEncoder::HeAac, audio_encoder::HE_AAC),
    (AudioEncoder::AacEld, audio_encoder::AAC_ELD),
];

pub const AUDIO_SOURCE_TABLE: &[(RecordingSource, NativeConstant)] = &[
    (RecordingSource::Camcorder, audio_source::CAMCORDER),
    (RecordingSource::Default, audio_source::DEFAULT),
    (RecordingSource::Mic, audio_source::MIC),
    (RecordingSource::RemoteSubmix, audio_source::REMOTE_SUBMIX),
    (RecordingSource::Unprocessed, audio_source::UNPROCESSED),
    (RecordingSource::VoiceCall, audio_source::VOICE_CALL),
    (RecordingSource::VoiceCommunication, audio_source::VOICE_COMMUNICATION),
    (RecordingSource::VoiceDownlink, audio_source::VOICE_DOWNLINK),
    (RecordingSource::VoicePerformance, audio_source::VOICE_PERFORMANCE),
    (RecordingSource::VoiceRecognition, audio_source::VOICE_RECOGNITION),
    (RecordingSource::VoiceUplink, audio_source::VOICE_UPLINK),
];

/// Find the native constant for a symbolic value
pub fn lookup<T: PartialEq>(table: &[(T, NativeConstant)], value: &T) -> Option<NativeConstant> {
    table
        .iter()
        .find(|(symbolic, _)| symbolic == value)
        .map(|(_, native)| *native)
}
