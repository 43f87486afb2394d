//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! config file storage, platform version source, recording engine.

pub mod config;
pub mod engine;
pub mod platform;

// Re-export adapters
pub use config::XdgConfigStore;
pub use engine::DryRunEngine;
pub use platform::FixedPlatform;
