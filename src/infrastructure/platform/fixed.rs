//! Fixed platform version adapter

use crate::application::ports::PlatformInfo;
use crate::domain::platform::PlatformVersion;

/// Reports a version chosen up front (CLI flag, config file, or a host
/// application that already knows its API level).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPlatform {
    version: PlatformVersion,
}

impl FixedPlatform {
    pub fn new(version: PlatformVersion) -> Self {
        Self { version }
    }
}

impl PlatformInfo for FixedPlatform {
    fn version(&self) -> PlatformVersion {
        self.version
    }
}
