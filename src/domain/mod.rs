//! Domain layer - Core business logic
//!
//! Contains the options model, the platform resolver, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod options;
pub mod platform;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use options::{AudioEncoder, OutputFormat, RecordingOptions, RecordingPreset, RecordingSource};
pub use platform::{resolve, PlatformVersion, ResolvedSettings};
