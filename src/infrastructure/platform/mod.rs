//! Platform capability adapters

mod fixed;

pub use fixed::FixedPlatform;
