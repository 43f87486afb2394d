//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted user defaults (platform version, preset, ...)
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored config; a missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the config, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the built-in defaults. Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Layer built-in defaults, the stored file and `overrides` (highest wins).
    async fn load_merged(&self, overrides: AppConfig) -> Result<AppConfig, ConfigError> {
        let stored = self.load().await?;
        Ok(AppConfig::defaults().merge(stored).merge(overrides))
    }
}
