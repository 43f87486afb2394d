//! Version-gated container formats
//!
//! Some container formats only exist as native constants from a given
//! platform version on. Below that version the request degrades to the
//! native default format instead of failing.

use super::native::{output_format, NativeConstant};
use super::version::PlatformVersion;
use crate::domain::options::OutputFormat;

/// A container format whose native constant requires a minimum version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGate {
    pub format: OutputFormat,
    pub min_version: PlatformVersion,
    pub native: NativeConstant,
}

impl VersionGate {
    /// Native constant for this format on the given version
    pub const fn resolve(&self, version: PlatformVersion) -> NativeConstant {
        if self.is_available(version) {
            self.native
        } else {
            output_format::DEFAULT
        }
    }

    pub const fn is_available(&self, version: PlatformVersion) -> bool {
        version.api_level() >= self.min_version.api_level()
    }
}

/// Every gated container format. A format listed here must not also
/// appear in `native::OUTPUT_FORMAT_TABLE`.
pub const OUTPUT_FORMAT_GATES: &[VersionGate] = &[VersionGate {
    format: OutputFormat::Mpeg2Ts,
    min_version: PlatformVersion::OREO,
    native: output_format::MPEG_2_TS,
}];

/// The gate governing a format, if it has one
pub fn gate_for(format: OutputFormat) -> Option<&'static VersionGate> {
    OUTPUT_FORMAT_GATES.iter().find(|gate| gate.format == format)
}
