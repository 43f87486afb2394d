//! Platform resolver: symbolic values to native recorder constants

pub mod gating;
pub mod native;
mod resolver;
mod version;

pub use gating::{gate_for, VersionGate, OUTPUT_FORMAT_GATES};
pub use native::NativeConstant;
pub use resolver::{
    native_audio_encoder, native_audio_source, native_output_format, resolve, ResolvedSettings,
};
pub use version::PlatformVersion;
