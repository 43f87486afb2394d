//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};

use crate::domain::options::RecordingPreset;
use crate::domain::platform::PlatformVersion;

/// recorder-config - resolve recording options into native recorder settings
#[derive(Parser, Debug)]
#[command(name = "recorder-config")]
#[command(version)]
#[command(about = "Resolve cross-platform audio recording options into native recorder settings")]
#[command(long_about = None)]
pub struct Cli {
    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate options and print the native recorder settings as JSON
    Resolve {
        #[command(flatten)]
        input: OptionsInput,

        /// Platform API level to resolve for
        #[arg(short = 'p', long, value_name = "API_LEVEL", env = "RECORDER_PLATFORM_VERSION")]
        platform_version: Option<PlatformVersion>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Validate options and print them normalized as JSON
    Validate {
        #[command(flatten)]
        input: OptionsInput,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show every symbolic value and its native constant
    Table {
        /// Platform API level to show constants for
        #[arg(short = 'p', long, value_name = "API_LEVEL", env = "RECORDER_PLATFORM_VERSION")]
        platform_version: Option<PlatformVersion>,
    },
    /// List the built-in presets
    Presets,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where the options payload comes from
#[derive(Args, Debug, Clone, Default)]
pub struct OptionsInput {
    /// JSON file holding the options object
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "json")]
    pub options: Option<PathBuf>,

    /// Options object as inline JSON
    #[arg(short = 'j', long, value_name = "JSON")]
    pub json: Option<String>,

    /// Preset the options are layered over
    #[arg(short = 'P', long, value_name = "PRESET")]
    pub preset: Option<PresetArg>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Preset argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    #[value(name = "high_quality", alias = "high-quality")]
    HighQuality,
    #[value(name = "low_quality", alias = "low-quality")]
    LowQuality,
}

impl From<PresetArg> for RecordingPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::HighQuality => RecordingPreset::HighQuality,
            PresetArg::LowQuality => RecordingPreset::LowQuality,
        }
    }
}

/// Log level argument
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Parsed options for `resolve` and `validate`
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub payload: Map<String, Value>,
    pub preset: Option<RecordingPreset>,
    pub platform_version: PlatformVersion,
    pub pretty: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["platform_version", "preset", "audio_source", "metering"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
