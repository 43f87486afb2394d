//! Platform capability port interface

use crate::domain::platform::PlatformVersion;

/// Port supplying the running platform's version
pub trait PlatformInfo: Send + Sync {
    /// Version used to pick version-gated native constants
    fn version(&self) -> PlatformVersion;
}
