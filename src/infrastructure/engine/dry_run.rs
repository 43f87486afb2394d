//! Dry-run recording engine adapter

use async_trait::async_trait;

use crate::application::ports::{EngineError, RecordingEngine};
use crate::domain::platform::ResolvedSettings;

/// Engine that accepts settings without touching any native recorder.
/// Each call is logged at info level with the native constants it received.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunEngine;

impl DryRunEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordingEngine for DryRunEngine {
    async fn configure(
        &self,
        extension: &str,
        settings: &ResolvedSettings,
    ) -> Result<(), EngineError> {
        tracing::info!(
            extension,
            output_format = settings.native_output_format(),
            audio_encoder = settings.native_audio_encoder(),
            audio_source = settings.native_audio_source(),
            "dry run: recorder would be configured"
        );
        Ok(())
    }
}
