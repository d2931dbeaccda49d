//! Photo gallery and animated image blocks

use tracing::debug;

use crate::domain::config::{GalleryConfig, GifConfig};

/// At most this many gallery images are shown
pub const MAX_GALLERY_IMAGES: usize = 4;

/// Alternative text of every gallery image
pub const GALLERY_IMAGE_ALT: &str = "Photo";

/// Alternative text of the animated image when none is configured
pub const DEFAULT_GIF_ALT: &str = "GIF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Enabled gallery with its first images, in configured order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    /// `None` unless the gallery is explicitly enabled. Blank entries are
    /// skipped before the cap applies.
    pub fn from_config(config: Option<&GalleryConfig>) -> Option<Self> {
        let config = config.filter(|c| c.enabled == Some(true))?;

        let configured = config.images.as_deref().unwrap_or_default();
        let images: Vec<GalleryImage> = configured
            .iter()
            .map(|src| src.trim())
            .filter(|src| !src.is_empty())
            .take(MAX_GALLERY_IMAGES)
            .map(|src| GalleryImage {
                src: src.to_string(),
                alt: GALLERY_IMAGE_ALT.to_string(),
            })
            .collect();

        if configured.len() > images.len() {
            debug!(configured = configured.len(), shown = images.len(), "gallery trimmed");
        }

        Some(Self { images })
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Enabled animated image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifBlock {
    pub src: String,
    pub alt: String,
}

impl GifBlock {
    /// `None` unless the block is explicitly enabled and has a source
    pub fn from_config(config: Option<&GifConfig>) -> Option<Self> {
        let config = config.filter(|c| c.enabled == Some(true))?;

        let Some(src) = config.url.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("animated image enabled without a source, hiding it");
            return None;
        };
        let alt = config
            .alt
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_GIF_ALT);

        Some(Self {
            src: src.to_string(),
            alt: alt.to_string(),
        })
    }
}
