//! Embedded player port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::player::InvalidStateTransition;
use crate::domain::video::{EmbedUrl, VideoReference};

/// Player errors
#[derive(Debug, Clone, Error)]
pub enum PlayerError {
    #[error("No recognized video to load")]
    Unrecognized,

    #[error("Failed to load player: {0}")]
    LoadFailed(String),

    #[error("Player not ready after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Transition(#[from] InvalidStateTransition),
}

/// Port for the external player integration
#[async_trait]
pub trait PlayerBackend: Send + Sync {
    /// Load the player for a video and resolve once it is ready.
    ///
    /// # Returns
    /// The embed address the player was mounted with
    async fn load(&self, video: &VideoReference) -> Result<EmbedUrl, PlayerError>;
}
