//! Site configuration storage port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::SiteConfig;
use crate::domain::error::ConfigError;

/// Where the persisted layer of [`SiteConfig`] lives.
///
/// Stores return the raw file layer only; layering over defaults and CLI
/// overrides happens in the caller.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored layer. A missing file is [`SiteConfig::empty`], not an error.
    async fn load(&self) -> Result<SiteConfig, ConfigError>;

    /// Replace the stored layer, creating parent directories as needed.
    async fn save(&self, config: &SiteConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write [`SiteConfig::defaults`].
    ///
    /// # Errors
    /// [`ConfigError::AlreadyExists`] when a file is already present
    async fn init(&self) -> Result<(), ConfigError>;
}
