//! recorder-config - audio recording options resolver
//!
//! Turns a declarative, platform-neutral description of a recording
//! session into the native constants a platform recorder needs, degrading
//! to defaults where the running platform version lacks a capability.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Options model, native constant tables, resolver, errors
//! - **Application**: Prepare use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (config file, platform, dry-run engine)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
