//! Symbolic options to native recorder settings

use std::num::{NonZeroU32, NonZeroU64};

use serde::Serialize;

use super::gating::gate_for;
use super::native::{
    self, lookup, NativeConstant, AUDIO_ENCODER_TABLE, AUDIO_SOURCE_TABLE, OUTPUT_FORMAT_TABLE,
};
use super::version::PlatformVersion;
use crate::domain::options::{AudioEncoder, OutputFormat, RecordingOptions, RecordingSource};

/// Platform-ready recorder parameters derived from `RecordingOptions`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    native_output_format: NativeConstant,
    native_audio_encoder: NativeConstant,
    native_audio_source: NativeConstant,
    sample_rate: Option<f64>,
    number_of_channels: Option<NonZeroU32>,
    bit_rate: Option<NonZeroU32>,
    max_file_size: Option<NonZeroU64>,
    is_metering_enabled: bool,
}

impl ResolvedSettings {
    pub fn native_output_format(&self) -> NativeConstant {
        self.native_output_format
    }

    pub fn native_audio_encoder(&self) -> NativeConstant {
        self.native_audio_encoder
    }

    pub fn native_audio_source(&self) -> NativeConstant {
        self.native_audio_source
    }

    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    pub fn number_of_channels(&self) -> Option<NonZeroU32> {
        self.number_of_channels
    }

    pub fn bit_rate(&self) -> Option<NonZeroU32> {
        self.bit_rate
    }

    pub fn max_file_size(&self) -> Option<NonZeroU64> {
        self.max_file_size
    }

    pub fn is_metering_enabled(&self) -> bool {
        self.is_metering_enabled
    }
}

/// Native container format on the given platform version
pub fn native_output_format(format: OutputFormat, version: PlatformVersion) -> NativeConstant {
    if let Some(gate) = gate_for(format) {
        let native = gate.resolve(version);
        if !gate.is_available(version) {
            tracing::debug!(
                format = %format,
                platform_version = %version,
                min_version = %gate.min_version,
                "output format unavailable, using platform default"
            );
        }
        return native;
    }

    lookup(OUTPUT_FORMAT_TABLE, &format).unwrap_or(native::output_format::DEFAULT)
}

pub fn native_audio_encoder(encoder: AudioEncoder) -> NativeConstant {
    lookup(AUDIO_ENCODER_TABLE, &encoder).unwrap_or(native::audio_encoder::DEFAULT)
}

pub fn native_audio_source(source: RecordingSource) -> NativeConstant {
    lookup(AUDIO_SOURCE_TABLE, &source).unwrap_or(native::audio_source::DEFAULT)
}

/// Resolve validated options for a platform version.
///
/// Total and side-effect free; an unavailable container format degrades to
/// the platform default rather than failing.
pub fn resolve(options: &RecordingOptions, version: PlatformVersion) -> ResolvedSettings {
    let format = options.output_format().unwrap_or_default();
    let encoder = options.audio_encoder().unwrap_or_default();

    ResolvedSettings {
        native_output_format: native_output_format(format, version),
        native_audio_encoder: native_audio_encoder(encoder),
        native_audio_source: native_audio_source(options.audio_source()),
        sample_rate: options.sample_rate(),
        number_of_channels: options.number_of_channels(),
        bit_rate: options.bit_rate(),
        max_file_size: options.max_file_size(),
        is_metering_enabled: options.is_metering_enabled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::ALL_OUTPUT_FORMATS;

    fn options_with_format(format: OutputFormat) -> RecordingOptions {
        RecordingOptions::builder(".ts").output_format(format).build().unwrap()
    }

    #[test]
    fn absent_format_and_encoder_resolve_as_default() {
        let absent = RecordingOptions::builder(".m4a").build().unwrap();
        let explicit = RecordingOptions::builder(".m4a")
            .output_format(OutputFormat::Default)
            .audio_encoder(AudioEncoder::Default)
            .build()
            .unwrap();

        let version = PlatformVersion::OREO;
        assert_eq!(resolve(&absent, version), resolve(&explicit, version));
        assert_eq!(resolve(&absent, version).native_output_format(), 0);
        assert_eq!(resolve(&absent, version).native_audio_encoder(), 0);
    }

    #[test]
    fn default_source_is_mic() {
        let options = RecordingOptions::builder(".m4a").build().unwrap();
        let settings = resolve(&options, PlatformVersion::OREO);
        assert_eq!(settings.native_audio_source(), native::audio_source::MIC);
    }

    #[test]
    fn mpeg2ts_is_version_gated() {
        let options = options_with_format(OutputFormat::Mpeg2Ts);
        assert_eq!(
            resolve(&options, PlatformVersion::new(25)).native_output_format(),
            native::output_format::DEFAULT
        );
        assert_eq!(
            resolve(&options, PlatformVersion::new(26)).native_output_format(),
            native::output_format::MPEG_2_TS
        );
        assert_eq!(
            resolve(&options, PlatformVersion::new(27)).native_output_format(),
            native::output_format::MPEG_2_TS
        );
    }

    #[test]
    fn other_formats_ignore_version() {
        for format in ALL_OUTPUT_FORMATS.iter().filter(|f| **f != OutputFormat::Mpeg2Ts) {
            let old = native_output_format(*format, PlatformVersion::new(16));
            let new = native_output_format(*format, PlatformVersion::LATEST_KNOWN);
            assert_eq!(old, new, "{:?}", format);
        }
    }

    #[test]
    fn encoder_mapping() {
        assert_eq!(native_audio_encoder(AudioEncoder::Aac), native::audio_encoder::AAC);
        assert_eq!(native_audio_encoder(AudioEncoder::HeAac), native::audio_encoder::HE_AAC);
    }

    #[test]
    fn passthrough_fields() {
        let options = RecordingOptions::builder(".m4a")
            .sample_rate(44100.0)
            .number_of_channels(2)
            .bit_rate(128000)
            .max_file_size(1_000_000)
            .metering(true)
            .build()
            .unwrap();

        let settings = resolve(&options, PlatformVersion::new(21));
        assert_eq!(settings.sample_rate(), Some(44100.0));
        assert_eq!(settings.number_of_channels().map(NonZeroU32::get), Some(2));
        assert_eq!(settings.bit_rate().map(NonZeroU32::get), Some(128000));
        assert_eq!(settings.max_file_size().map(NonZeroU64::get), Some(1_000_000));
        assert!(settings.is_metering_enabled());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let options = RecordingOptions::builder(".m4a").bit_rate(64000).build().unwrap();
        let json = serde_json::to_value(resolve(&options, PlatformVersion::OREO)).unwrap();
        assert_eq!(json["nativeOutputFormat"], 0);
        assert_eq!(json["nativeAudioSource"], 1);
        assert_eq!(json["bitRate"], 64000);
        assert!(json["maxFileSize"].is_null());
        assert_eq!(json["isMeteringEnabled"], false);
    }
}
