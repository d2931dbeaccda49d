//! Video platform references

pub mod embed;
pub mod reference;

pub use embed::EmbedUrl;
pub use reference::{extract, VideoReference};
