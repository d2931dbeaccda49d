//! Domain layer - Core logic
//!
//! Contains value objects, pure functions, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod elapsed;
pub mod error;
pub mod page;
pub mod player;
pub mod video;

// Re-export common types
pub use config::SiteConfig;
pub use elapsed::{ElapsedDuration, ReferenceInstant, SinceLabel};
pub use error::*;
pub use page::{Quote, SocialLink, SocialNetwork, SplashTiming};
pub use player::{PlayerSession, PlayerState};
pub use video::{EmbedUrl, VideoReference};
