//! Application layer - Use cases and port interfaces
//!
//! Contains the core operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod prepare;

// Re-export use cases
pub use prepare::{PrepareError, PrepareInput, PrepareOutput, PrepareRecordingUseCase};
