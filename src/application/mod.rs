//! Application layer - Use cases and port interfaces
//!
//! Contains the page assembly, the periodic counter refresh, the player
//! handshake, and trait definitions for external system interactions.

pub mod landing;
pub mod player;
pub mod ports;
pub mod ticker;

// Re-export use cases
pub use landing::{BuildLandingUseCase, ContentBlock, LandingPage, SinceSummary};
pub use player::{EmbedPlayer, DEFAULT_READY_TIMEOUT};
pub use ticker::{SinceTicker, DEFAULT_TICK_PERIOD};
