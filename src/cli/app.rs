//! Runners for the resolve, validate, table and presets commands

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::application::ports::ConfigStore;
use crate::application::{PrepareError, PrepareInput, PrepareRecordingUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::ValidationError;
use crate::domain::options::{
    parse_payload_object, payload, ALL_AUDIO_ENCODERS, ALL_OUTPUT_FORMATS, ALL_PRESETS,
    ALL_RECORDING_SOURCES,
};
use crate::domain::platform::{
    gate_for, native_audio_encoder, native_audio_source, native_output_format, PlatformVersion,
};
use crate::infrastructure::{DryRunEngine, FixedPlatform, XdgConfigStore};

use super::args::{OptionsInput, ResolveOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Errors while collecting the options payload
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read options file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

impl InputError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } => EXIT_ERROR,
            Self::Invalid(_) => EXIT_USAGE_ERROR,
        }
    }
}

/// Load the options object from a file, inline JSON, or nothing
pub async fn read_payload(input: &OptionsInput) -> Result<Map<String, Value>, InputError> {
    if let Some(path) = &input.options {
        let content = read_file(path).await?;
        return Ok(parse_payload_object(&content)?);
    }

    match &input.json {
        Some(json) => Ok(parse_payload_object(json)?),
        None => Ok(Map::new()),
    }
}

async fn read_file(path: &Path) -> Result<String, InputError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InputError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Fill payload keys the caller left out with the user's configured defaults.
/// Invalid stored values fall back to the built-in defaults.
pub fn apply_config_defaults(map: &mut Map<String, Value>, config: &AppConfig) {
    map.entry(payload::AUDIO_SOURCE)
        .or_insert_with(|| Value::from(config.audio_source_or_default().as_str()));
    map.entry(payload::IS_METERING_ENABLED)
        .or_insert_with(|| Value::from(config.metering_or_default()));
}

/// Load and merge configuration from file and CLI.
/// An unreadable config file is reported and treated as empty.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    match store.load_merged(cli_config.clone()).await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config file");
            AppConfig::defaults().merge(cli_config)
        }
    }
}

/// Resolve options and print the native settings
pub async fn run_resolve(options: ResolveOptions) -> ExitCode {
    let presenter = Presenter::new();

    let engine = DryRunEngine::new();
    let use_case =
        PrepareRecordingUseCase::new(FixedPlatform::new(options.platform_version), engine);

    let input = PrepareInput {
        preset: options.preset,
        payload: options.payload,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let degraded = output
                .options
                .output_format()
                .and_then(gate_for)
                .filter(|gate| !gate.is_available(output.platform_version));
            if let Some(gate) = degraded {
                presenter.warn(&format!(
                    "outputFormat '{}' requires API {}; using default on API {}",
                    gate.format, gate.min_version, output.platform_version
                ));
            }
            print_json(&presenter, &output.settings, options.pretty)
        }
        Err(PrepareError::Validation(e)) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Validate options and print them normalized
pub fn run_validate(options: ResolveOptions) -> ExitCode {
    let presenter = Presenter::new();
    let input = PrepareInput {
        preset: options.preset,
        payload: options.payload,
    };

    match PrepareRecordingUseCase::<FixedPlatform, DryRunEngine>::validate(&input) {
        Ok(validated) => print_json(&presenter, &validated.to_payload(), options.pretty),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}

/// Print every mapping table for a platform version
pub fn run_table(version: PlatformVersion) -> ExitCode {
    let presenter = Presenter::new();

    presenter.section(&format!("outputFormat (API {})", version));
    for format in ALL_OUTPUT_FORMATS {
        let native = native_output_format(*format, version);
        let note = gate_for(*format).map(|gate| {
            if gate.is_available(version) {
                format!("requires API {}", gate.min_version)
            } else {
                format!("requires API {}, falls back to default", gate.min_version)
            }
        });
        presenter.mapping(format.as_str(), native, note.as_deref());
    }

    presenter.section("audioEncoder");
    for encoder in ALL_AUDIO_ENCODERS {
        presenter.mapping(encoder.as_str(), native_audio_encoder(*encoder), None);
    }

    presenter.section("audioSource");
    for source in ALL_RECORDING_SOURCES {
        presenter.mapping(source.as_str(), native_audio_source(*source), None);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// List presets and the options they expand to
pub fn run_presets() -> ExitCode {
    let presenter = Presenter::new();

    for preset in ALL_PRESETS {
        match preset.options() {
            Ok(options) => {
                presenter.key_value(preset.as_str(), preset.label());
                presenter.output(&format!("  {}", Value::Object(options.to_payload())));
            }
            Err(e) => {
                presenter.error(&format!("Preset {} is invalid: {}", preset, e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn print_json<T: Serialize>(presenter: &Presenter, value: &T, pretty: bool) -> ExitCode {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match rendered {
        Ok(json) => {
            presenter.output(&json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to render output: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
