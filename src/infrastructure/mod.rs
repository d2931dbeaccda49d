//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the TOML config file, the system clock, and the embed player backend.

pub mod clock;
pub mod config;
pub mod player;

// Re-export adapters
pub use clock::SystemClock;
pub use config::XdgConfigStore;
pub use player::NoCookieEmbedBackend;
