//! Recording options value object

use std::num::{NonZeroU32, NonZeroU64};

use serde_json::{Map, Value};

use super::payload;
use super::{AudioEncoder, OutputFormat, RecordingSource};
use crate::domain::error::ValidationError;

/// Platform-neutral description of a recording request.
///
/// Immutable once built. Every constructor validates, so holding a
/// `RecordingOptions` means the extension is non-empty, every enum is a
/// known variant and every numeric field present is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingOptions {
    extension: String,
    sample_rate: Option<f64>,
    number_of_channels: Option<NonZeroU32>,
    bit_rate: Option<NonZeroU32>,
    output_format: Option<OutputFormat>,
    audio_encoder: Option<AudioEncoder>,
    max_file_size: Option<NonZeroU64>,
    is_metering_enabled: bool,
    audio_source: RecordingSource,
}

impl RecordingOptions {
    /// Start building options for the given file extension
    pub fn builder(extension: impl Into<String>) -> RecordingOptionsBuilder {
        RecordingOptionsBuilder::new(extension)
    }

    /// Build options from a string-keyed payload.
    ///
    /// Unknown keys are ignored and `null` counts as absent.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let extension = match payload::get(payload, payload::EXTENSION) {
            Some(value) => payload::as_str(payload::EXTENSION, value)?,
            None => {
                return Err(ValidationError::Missing {
                    field: payload::EXTENSION,
                })
            }
        };

        let mut builder = RecordingOptionsBuilder::new(extension);
        builder.apply_payload(payload)?;
        builder.build()
    }

    /// Overlay a payload onto existing options (e.g. a preset).
    ///
    /// Keys present in the payload win; everything else comes from `base`.
    pub fn from_payload_with_base(
        base: &RecordingOptions,
        payload: &Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        let mut builder = base.to_builder();
        if let Some(value) = payload::get(payload, payload::EXTENSION) {
            builder.extension = payload::as_str(payload::EXTENSION, value)?.to_string();
        }
        builder.apply_payload(payload)?;
        builder.build()
    }

    /// Parse a JSON document holding a payload object
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let map = parse_payload_object(json)?;
        Self::from_payload(&map)
    }

    /// Builder pre-filled with these options
    pub fn to_builder(&self) -> RecordingOptionsBuilder {
        RecordingOptionsBuilder {
            extension: self.extension.clone(),
            sample_rate: self.sample_rate,
            number_of_channels: self.number_of_channels.map(NonZeroU32::get),
            bit_rate: self.bit_rate.map(NonZeroU32::get),
            output_format: self.output_format,
            audio_encoder: self.audio_encoder,
            max_file_size: self.max_file_size.map(NonZeroU64::get),
            is_metering_enabled: self.is_metering_enabled,
            audio_source: self.audio_source,
        }
    }

    /// Render back into the payload shape, omitting absent fields
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(payload::EXTENSION.into(), Value::from(self.extension.as_str()));
        if let Some(rate) = self.sample_rate {
            map.insert(payload::SAMPLE_RATE.into(), Value::from(rate));
        }
        if let Some(channels) = self.number_of_channels {
            map.insert(payload::NUMBER_OF_CHANNELS.into(), Value::from(channels.get()));
        }
        if let Some(bit_rate) = self.bit_rate {
            map.insert(payload::BIT_RATE.into(), Value::from(bit_rate.get()));
        }
        if let Some(format) = self.output_format {
            map.insert(payload::OUTPUT_FORMAT.into(), Value::from(format.as_str()));
        }
        if let Some(encoder) = self.audio_encoder {
            map.insert(payload::AUDIO_ENCODER.into(), Value::from(encoder.as_str()));
        }
        if let Some(size) = self.max_file_size {
            map.insert(payload::MAX_FILE_SIZE.into(), Value::from(size.get()));
        }
        map.insert(
            payload::IS_METERING_ENABLED.into(),
            Value::from(self.is_metering_enabled),
        );
        map.insert(
            payload::AUDIO_SOURCE.into(),
            Value::from(self.audio_source.as_str()),
        );
        map
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Sample rate in Hz; `None` means platform default
    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    pub fn number_of_channels(&self) -> Option<NonZeroU32> {
        self.number_of_channels
    }

    pub fn bit_rate(&self) -> Option<NonZeroU32> {
        self.bit_rate
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn audio_encoder(&self) -> Option<AudioEncoder> {
        self.audio_encoder
    }

    /// Size limit in bytes; `None` means unbounded
    pub fn max_file_size(&self) -> Option<NonZeroU64> {
        self.max_file_size
    }

    pub fn is_metering_enabled(&self) -> bool {
        self.is_metering_enabled
    }

    pub fn audio_source(&self) -> RecordingSource {
        self.audio_source
    }
}

/// Parse a JSON document that must be an object
pub fn parse_payload_object(json: &str) -> Result<Map<String, Value>, ValidationError> {
    let value: Value = serde_json::from_str(json).map_err(|e| ValidationError::WrongType {
        field: "payload",
        value: e.to_string(),
        expected: "JSON object",
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::WrongType {
            field: "payload",
            value: other.to_string(),
            expected: "JSON object",
        }),
    }
}

/// Typed builder for `RecordingOptions`. Validation happens in `build`.
#[derive(Debug, Clone)]
pub struct RecordingOptionsBuilder {
    extension: String,
    sample_rate: Option<f64>,
    number_of_channels: Option<u32>,
    bit_rate: Option<u32>,
    output_format: Option<OutputFormat>,
    audio_encoder: Option<AudioEncoder>,
    max_file_size: Option<u64>,
    is_metering_enabled: bool,
    audio_source: RecordingSource,
}

impl RecordingOptionsBuilder {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            sample_rate: None,
            number_of_channels: None,
            bit_rate: None,
            output_format: None,
            audio_encoder: None,
            max_file_size: None,
            is_metering_enabled: false,
            audio_source: RecordingSource::default(),
        }
    }

    pub fn sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate = Some(hz);
        self
    }

    pub fn number_of_channels(mut self, channels: u32) -> Self {
        self.number_of_channels = Some(channels);
        self
    }

    pub fn bit_rate(mut self, bits_per_second: u32) -> Self {
        self.bit_rate = Some(bits_per_second);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn audio_encoder(mut self, encoder: AudioEncoder) -> Self {
        self.audio_encoder = Some(encoder);
        self
    }

    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    pub fn metering(mut self, enabled: bool) -> Self {
        self.is_metering_enabled = enabled;
        self
    }

    pub fn audio_source(mut self, source: RecordingSource) -> Self {
        self.audio_source = source;
        self
    }

    /// Apply every recognized non-extension key of a payload
    fn apply_payload(&mut self, map: &Map<String, Value>) -> Result<(), ValidationError> {
        if let Some(v) = payload::get(map, payload::SAMPLE_RATE) {
            self.sample_rate = Some(payload::as_positive_f64(payload::SAMPLE_RATE, v)?);
        }
        if let Some(v) = payload::get(map, payload::NUMBER_OF_CHANNELS) {
            self.number_of_channels =
                Some(payload::as_positive_u32(payload::NUMBER_OF_CHANNELS, v)?);
        }
        if let Some(v) = payload::get(map, payload::BIT_RATE) {
            self.bit_rate = Some(payload::as_positive_u32(payload::BIT_RATE, v)?);
        }
        if let Some(v) = payload::get(map, payload::OUTPUT_FORMAT) {
            self.output_format = Some(payload::as_str(payload::OUTPUT_FORMAT, v)?.parse()?);
        }
        if let Some(v) = payload::get(map, payload::AUDIO_ENCODER) {
            self.audio_encoder = Some(payload::as_str(payload::AUDIO_ENCODER, v)?.parse()?);
        }
        if let Some(v) = payload::get(map, payload::MAX_FILE_SIZE) {
            self.max_file_size = Some(payload::as_positive_u64(payload::MAX_FILE_SIZE, v)?);
        }
        if let Some(v) = payload::get(map, payload::IS_METERING_ENABLED) {
            self.is_metering_enabled = payload::as_bool(payload::IS_METERING_ENABLED, v)?;
        }
        if let Some(v) = payload::get(map, payload::AUDIO_SOURCE) {
            self.audio_source = payload::as_str(payload::AUDIO_SOURCE, v)?.parse()?;
        }
        Ok(())
    }

    /// Validate and produce the immutable options
    pub fn build(self) -> Result<RecordingOptions, ValidationError> {
        // Stored as given; only a blank extension is rejected
        if self.extension.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: payload::EXTENSION,
                value: self.extension,
            });
        }

        if let Some(rate) = self.sample_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ValidationError::NotPositive {
                    field: payload::SAMPLE_RATE,
                    value: rate.to_string(),
                });
            }
        }

        Ok(RecordingOptions {
            extension: self.extension,
            sample_rate: self.sample_rate,
            number_of_channels: non_zero_u32(payload::NUMBER_OF_CHANNELS, self.number_of_channels)?,
            bit_rate: non_zero_u32(payload::BIT_RATE, self.bit_rate)?,
            output_format: self.output_format,
            audio_encoder: self.audio_encoder,
            max_file_size: match self.max_file_size {
                None => None,
                Some(bytes) => Some(NonZeroU64::new(bytes).ok_or(ValidationError::NotPositive {
                    field: payload::MAX_FILE_SIZE,
                    value: bytes.to_string(),
                })?),
            },
            is_metering_enabled: self.is_metering_enabled,
            audio_source: self.audio_source,
        })
    }
}

fn non_zero_u32(
    field: &'static str,
    value: Option<u32>,
) -> Result<Option<NonZeroU32>, ValidationError> {
    match value {
        None => Ok(None),
        Some(n) => NonZeroU32::new(n)
            .map(Some)
            .ok_or(ValidationError::NotPositive {
                field,
                value: n.to_string(),
            }),
    }
}
