//! Options model: symbolic, platform-neutral recording configuration

mod audio_encoder;
mod output_format;
pub mod payload;
mod preset;
mod recording_options;
mod recording_source;

pub use audio_encoder::{AudioEncoder, ALL_AUDIO_ENCODERS};
pub use output_format::{OutputFormat, ALL_OUTPUT_FORMATS};
pub use preset::{RecordingPreset, ALL_PRESETS};
pub use recording_options::{parse_payload_object, RecordingOptions, RecordingOptionsBuilder};
pub use recording_source::{RecordingSource, ALL_RECORDING_SOURCES};
