//! Embedded player use case
//!
//! Wraps the asynchronous load-then-ready handshake of the external player.
//! The handshake runs at most once; concurrent callers await the same
//! completion. A failed handshake leaves the session not loaded so a later
//! call can retry.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::player::{Playback, PlayerSession, PlayerState};
use crate::domain::video::{EmbedUrl, VideoReference};

use super::ports::{PlayerBackend, PlayerError};

/// How long the player may take to become ready
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(8);

/// Player for one video
pub struct EmbedPlayer<B: PlayerBackend> {
    backend: B,
    video: VideoReference,
    ready_timeout: Duration,
    embed: OnceCell<EmbedUrl>,
    session: Mutex<PlayerSession>,
}

impl<B: PlayerBackend> EmbedPlayer<B> {
    /// Create a player in the not-loaded state
    pub fn new(backend: B, video: VideoReference) -> Self {
        Self {
            backend,
            video,
            ready_timeout: DEFAULT_READY_TIMEOUT,
            embed: OnceCell::new(),
            session: Mutex::new(PlayerSession::new()),
        }
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn video(&self) -> &VideoReference {
        &self.video
    }

    pub fn state(&self) -> PlayerState {
        self.session().state()
    }

    pub fn is_playing(&self) -> bool {
        self.session().is_playing()
    }

    /// Load the player if needed and wait until it is ready
    pub async fn ensure_ready(&self) -> Result<&EmbedUrl, PlayerError> {
        if !self.video.is_recognized() {
            return Err(PlayerError::Unrecognized);
        }

        self.embed
            .get_or_try_init(|| async {
                debug!(video_id = self.video.platform_id(), "loading player");
                let embed = time_limited(self.ready_timeout, self.backend.load(&self.video)).await?;
                self.session().mark_ready()?;
                info!(video_id = self.video.platform_id(), "player ready");
                Ok::<_, PlayerError>(embed)
            })
            .await
    }

    /// Flip playback, loading the player first if needed
    pub async fn toggle(&self) -> Result<Playback, PlayerError> {
        self.ensure_ready().await?;
        let playback = self.session().toggle()?;
        debug!(?playback, "playback toggled");
        Ok(playback)
    }

    fn session(&self) -> MutexGuard<'_, PlayerSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn time_limited<F>(limit: Duration, load: F) -> Result<EmbedUrl, PlayerError>
where
    F: std::future::Future<Output = Result<EmbedUrl, PlayerError>>,
{
    tokio::time::timeout(limit, load)
        .await
        .map_err(|_| PlayerError::Timeout(limit))?
}
