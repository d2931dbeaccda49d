//! Player backend adapters

pub mod nocookie;

pub use nocookie::NoCookieEmbedBackend;
