//! Prepare recording use case

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::error::ValidationError;
use crate::domain::options::{RecordingOptions, RecordingPreset};
use crate::domain::platform::{resolve, PlatformVersion, ResolvedSettings};

use super::ports::{EngineError, PlatformInfo, RecordingEngine};

/// Errors from the prepare use case
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("Invalid recording options: {0}")]
    Validation(#[from] ValidationError),

    #[error("Recording engine rejected settings: {0}")]
    Engine(#[from] EngineError),
}

/// Input parameters for the prepare use case
#[derive(Debug, Clone, Default)]
pub struct PrepareInput {
    /// Preset whose options the payload is layered over
    pub preset: Option<RecordingPreset>,
    /// Raw options as received from the caller
    pub payload: Map<String, Value>,
}

/// Output from the prepare use case
#[derive(Debug, Clone)]
pub struct PrepareOutput {
    pub options: RecordingOptions,
    pub platform_version: PlatformVersion,
    pub settings: ResolvedSettings,
}

/// Validates caller options, resolves them for the running platform and
/// configures the recording engine with the result.
pub struct PrepareRecordingUseCase<P, E>
where
    P: PlatformInfo,
    E: RecordingEngine,
{
    platform: P,
    engine: E,
}

impl<P, E> PrepareRecordingUseCase<P, E>
where
    P: PlatformInfo,
    E: RecordingEngine,
{
    /// Create a new use case instance
    pub fn new(platform: P, engine: E) -> Self {
        Self { platform, engine }
    }

    /// Build validated options from the input without touching the engine
    pub fn validate(input: &PrepareInput) -> Result<RecordingOptions, ValidationError> {
        match input.preset {
            Some(preset) => {
                RecordingOptions::from_payload_with_base(&preset.options()?, &input.payload)
            }
            None => RecordingOptions::from_payload(&input.payload),
        }
    }

    /// Execute the prepare workflow.
    ///
    /// Invalid options are returned as an error before the engine is called.
    pub async fn execute(&self, input: PrepareInput) -> Result<PrepareOutput, PrepareError> {
        let options = Self::validate(&input)?;

        let platform_version = self.platform.version();
        let settings = resolve(&options, platform_version);
        tracing::debug!(
            extension = options.extension(),
            platform_version = %platform_version,
            output_format = settings.native_output_format(),
            audio_encoder = settings.native_audio_encoder(),
            audio_source = settings.native_audio_source(),
            "resolved recording settings"
        );

        self.engine.configure(options.extension(), &settings).await?;

        Ok(PrepareOutput {
            options,
            platform_version,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockPlatform(u32);

    impl PlatformInfo for MockPlatform {
        fn version(&self) -> PlatformVersion {
            PlatformVersion::new(self.0)
        }
    }

    #[derive(Default, Clone)]
    struct CountingEngine {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RecordingEngine for CountingEngine {
        async fn configure(
            &self,
            _extension: &str,
            _settings: &ResolvedSettings,
        ) -> Result<(), EngineError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BusyEngine;

    #[async_trait]
    impl RecordingEngine for BusyEngine {
        async fn configure(
            &self,
            _extension: &str,
            _settings: &ResolvedSettings,
        ) -> Result<(), EngineError> {
            Err(EngineError::Busy)
        }
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn execute_configures_engine() {
        let engine = CountingEngine::default();
        let use_case = PrepareRecordingUseCase::new(MockPlatform(26), engine.clone());

        let input = PrepareInput {
            preset: None,
            payload: payload(json!({ "extension": ".ts", "outputFormat": "mpeg2ts" })),
        };

        let output = use_case.execute(input).await.unwrap();
        assert_eq!(output.settings.native_output_format(), 8);
        assert_eq!(output.platform_version, PlatformVersion::OREO);
        assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_options_never_reach_engine() {
        let engine = CountingEngine::default();
        let use_case = PrepareRecordingUseCase::new(MockPlatform(30), engine.clone());

        let input = PrepareInput {
            preset: None,
            payload: payload(json!({ "extension": ".m4a", "audioSource": "not_a_real_source" })),
        };

        let err = use_case.execute(input).await.unwrap_err();
        match err {
            PrepareError::Validation(e) => assert_eq!(e.field(), "audioSource"),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn preset_is_used_as_base() {
        let use_case = PrepareRecordingUseCase::new(MockPlatform(30), CountingEngine::default());

        let input = PrepareInput {
            preset: Some(RecordingPreset::LowQuality),
            payload: payload(json!({ "isMeteringEnabled": true })),
        };

        let output = use_case.execute(input).await.unwrap();
        assert_eq!(output.options.extension(), ".3gp");
        assert_eq!(output.settings.native_output_format(), 1);
        assert_eq!(output.settings.native_audio_encoder(), 1);
        assert!(output.settings.is_metering_enabled());
    }

    #[tokio::test]
    async fn engine_errors_are_propagated() {
        let use_case = PrepareRecordingUseCase::new(MockPlatform(30), BusyEngine);
        let input = PrepareInput {
            preset: Some(RecordingPreset::HighQuality),
            payload: Map::new(),
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, PrepareError::Engine(EngineError::Busy)));
    }

    #[test]
    fn validate_requires_extension_without_preset() {
        let input = PrepareInput::default();
        let err =
            PrepareRecordingUseCase::<MockPlatform, BusyEngine>::validate(&input).unwrap_err();
        assert_eq!(err.field(), "extension");
    }
}
