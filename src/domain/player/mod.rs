//! Embedded video player lifecycle

pub mod session;

pub use session::{InvalidStateTransition, Playback, PlayerSession, PlayerState};
