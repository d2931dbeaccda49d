//! No-cookie embed backend
//!
//! Mounts the video through the privacy-enhanced embed endpoint. Building the
//! address is the whole handshake, so the player is ready as soon as the
//! address exists.

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{PlayerBackend, PlayerError};
use crate::domain::video::{EmbedUrl, VideoReference};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCookieEmbedBackend;

impl NoCookieEmbedBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlayerBackend for NoCookieEmbedBackend {
    async fn load(&self, video: &VideoReference) -> Result<EmbedUrl, PlayerError> {
        let embed = EmbedUrl::for_video(video).ok_or(PlayerError::Unrecognized)?;
        debug!(embed = %embed, "embed address built");
        Ok(embed)
    }
}
