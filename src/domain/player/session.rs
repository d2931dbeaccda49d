//! Embedded player session state machine

use std::fmt;
use thiserror::Error;

/// Player lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    NotLoaded,
    Ready,
}

impl PlayerState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotLoaded => "not loaded",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playback state, meaningful only once the player is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid player transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: PlayerState,
    pub action: String,
}

/// Player session entity.
///
/// State machine:
///   NOT_LOADED -> READY (mark_ready, once)
///   READY: PAUSED <-> PLAYING (play, pause, toggle)
#[derive(Debug, Default)]
pub struct PlayerSession {
    state: PlayerState,
    playback: Playback,
}

impl PlayerSession {
    /// Create a new session in the not-loaded state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_ready(&self) -> bool {
        self.state == PlayerState::Ready
    }

    pub fn is_playing(&self) -> bool {
        self.playback == Playback::Playing
    }

    /// Transition from NOT_LOADED to READY
    pub fn mark_ready(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PlayerState::NotLoaded {
            return Err(self.invalid("mark ready"));
        }
        self.state = PlayerState::Ready;
        Ok(())
    }

    /// Start playback
    pub fn play(&mut self) -> Result<(), InvalidStateTransition> {
        self.require_ready("play")?;
        self.playback = Playback::Playing;
        Ok(())
    }

    /// Pause playback; pausing a paused player is a no-op
    pub fn pause(&mut self) -> Result<(), InvalidStateTransition> {
        self.require_ready("pause")?;
        self.playback = Playback::Paused;
        Ok(())
    }

    /// Flip between playing and paused, returning the new playback state
    pub fn toggle(&mut self) -> Result<Playback, InvalidStateTransition> {
        self.require_ready("toggle playback")?;
        self.playback = match self.playback {
            Playback::Paused => Playback::Playing,
            Playback::Playing => Playback::Paused,
        };
        Ok(self.playback)
    }

    fn require_ready(&self, action: &str) -> Result<(), InvalidStateTransition> {
        if self.state != PlayerState::Ready {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_not_loaded() {
        let session = PlayerSession::new();
        assert!(!session.is_ready());
        assert!(!session.is_playing());
        assert_eq!(session.state(), PlayerState::NotLoaded);
    }

    #[test]
    fn mark_ready_once() {
        let mut session = PlayerSession::new();
        assert!(session.mark_ready().is_ok());
        assert!(session.is_ready());
        assert!(session.mark_ready().is_err());
    }

    #[test]
    fn playback_requires_ready() {
        let mut session = PlayerSession::new();
        assert!(session.play().is_err());
        assert!(session.pause().is_err());
        assert!(session.toggle().is_err());
    }

    #[test]
    fn toggle_flips_playback() {
        let mut session = PlayerSession::new();
        session.mark_ready().unwrap();
        assert_eq!(session.toggle().unwrap(), Playback::Playing);
        assert!(session.is_playing());
        assert_eq!(session.toggle().unwrap(), Playback::Paused);
    }

    #[test]
    fn play_and_pause() {
        let mut session = PlayerSession::new();
        session.mark_ready().unwrap();
        session.play().unwrap();
        assert!(session.is_playing());
        session.pause().unwrap();
        session.pause().unwrap();
        assert!(!session.is_playing());
    }

    #[test]
    fn error_message_names_state() {
        let mut session = PlayerSession::new();
        let err = session.play().unwrap_err();
        assert_eq!(err.to_string(), "Invalid player transition: cannot play while not loaded");
    }
}
