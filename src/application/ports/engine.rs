//! Recording engine port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::platform::ResolvedSettings;

/// Recording engine errors
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("Failed to configure recorder: {0}")]
    ConfigureFailed(String),

    #[error("Recorder is busy with another recording")]
    Busy,
}

/// Port for the native recording engine.
///
/// The engine owns the recorder lifecycle (outputs, start/stop, enforcing
/// the size limit, metering). This crate only hands it resolved settings.
#[async_trait]
pub trait RecordingEngine: Send + Sync {
    /// Configure the native recorder.
    ///
    /// # Arguments
    /// * `extension` - File extension of the output file
    /// * `settings` - Native settings produced by the resolver
    async fn configure(&self, extension: &str, settings: &ResolvedSettings)
        -> Result<(), EngineError>;
}

/// Blanket implementation for boxed engine types
#[async_trait]
impl RecordingEngine for Box<dyn RecordingEngine> {
    async fn configure(
        &self,
        extension: &str,
        settings: &ResolvedSettings,
    ) -> Result<(), EngineError> {
        self.as_ref().configure(extension, settings).await
    }
}
