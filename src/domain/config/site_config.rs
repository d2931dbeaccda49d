//! Site configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default minimum splash display time in milliseconds
pub const DEFAULT_SPLASH_MIN_DURATION_MS: u64 = 900;

/// Default brand shown in the footer
pub const DEFAULT_BRAND_NAME: &str = "Nadak";

/// Default photo location
pub const DEFAULT_PHOTO_SRC: &str = "./assets/photo.jpg";

/// Module toggles. A missing toggle counts as enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesConfig {
    pub photo_text_block: Option<bool>,
    pub youtube_background: Option<bool>,
    pub live_clock: Option<bool>,
}

/// Photo gallery. Hidden unless `enabled` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub enabled: Option<bool>,
    pub images: Option<Vec<String>>,
}

/// Animated image block. Hidden unless `enabled` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifConfig {
    pub enabled: Option<bool>,
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// Photo shown in the content block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoConfig {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Social network links. Blank values hide the link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinksConfig {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub tiktok: Option<String>,
}

/// Site configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub splash_min_duration_ms: Option<i64>,
    pub birth_date: Option<String>,
    pub since_prefix: Option<String>,
    pub brand_name: Option<String>,
    pub baseline: Option<String>,
    pub copyright_year: Option<i64>,
    pub quote_text: Option<String>,
    pub quote_html: Option<String>,
    pub youtube_url: Option<String>,
    pub modules: Option<ModulesConfig>,
    pub photo: Option<PhotoConfig>,
    pub social_links: Option<SocialLinksConfig>,
    pub gallery: Option<GalleryConfig>,
    pub gif: Option<GifConfig>,
}

impl SiteConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            splash_min_duration_ms: Some(DEFAULT_SPLASH_MIN_DURATION_MS as i64),
            birth_date: None,
            since_prefix: Some(crate::domain::elapsed::DEFAULT_SINCE_PREFIX.to_string()),
            brand_name: Some(DEFAULT_BRAND_NAME.to_string()),
            baseline: None,
            copyright_year: None,
            quote_text: None,
            quote_html: None,
            youtube_url: None,
            modules: Some(ModulesConfig {
                photo_text_block: Some(true),
                youtube_background: Some(true),
                live_clock: Some(true),
            }),
            photo: Some(PhotoConfig {
                src: Some(DEFAULT_PHOTO_SRC.to_string()),
                alt: Some(String::new()),
            }),
            social_links: None,
            gallery: None,
            gif: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            splash_min_duration_ms: other.splash_min_duration_ms.or(self.splash_min_duration_ms),
            birth_date: other.birth_date.or(self.birth_date),
            since_prefix: other.since_prefix.or(self.since_prefix),
            brand_name: other.brand_name.or(self.brand_name),
            baseline: other.baseline.or(self.baseline),
            copyright_year: other.copyright_year.or(self.copyright_year),
            quote_text: other.quote_text.or(self.quote_text),
            quote_html: other.quote_html.or(self.quote_html),
            youtube_url: other.youtube_url.or(self.youtube_url),
            modules: merge_section(self.modules, other.modules, |b, o| ModulesConfig {
                photo_text_block: o.photo_text_block.or(b.photo_text_block),
                youtube_background: o.youtube_background.or(b.youtube_background),
                live_clock: o.live_clock.or(b.live_clock),
            }),
            photo: merge_section(self.photo, other.photo, |b, o| PhotoConfig {
                src: o.src.or(b.src),
                alt: o.alt.or(b.alt),
            }),
            social_links: merge_section(self.social_links, other.social_links, |b, o| {
                SocialLinksConfig {
                    facebook: o.facebook.or(b.facebook),
                    instagram: o.instagram.or(b.instagram),
                    linkedin: o.linkedin.or(b.linkedin),
                    tiktok: o.tiktok.or(b.tiktok),
                }
            }),
            gallery: merge_section(self.gallery, other.gallery, |b, o| GalleryConfig {
                enabled: o.enabled.or(b.enabled),
                images: o.images.or(b.images),
            }),
            gif: merge_section(self.gif, other.gif, |b, o| GifConfig {
                enabled: o.enabled.or(b.enabled),
                url: o.url.or(b.url),
                alt: o.alt.or(b.alt),
            }),
        }
    }

    /// Minimum splash duration; missing or negative values use the default
    pub fn splash_min_duration_or_default(&self) -> Duration {
        let millis = self
            .splash_min_duration_ms
            .and_then(|ms| u64::try_from(ms).ok())
            .unwrap_or(DEFAULT_SPLASH_MIN_DURATION_MS);
        Duration::from_millis(millis)
    }

    /// Brand name, or "Nadak" if not set or blank
    pub fn brand_name_or_default(&self) -> &str {
        non_blank(self.brand_name.as_deref()).unwrap_or(DEFAULT_BRAND_NAME)
    }

    /// Counter prefix, or "Né depuis" if not set. An explicit blank prefix is kept.
    pub fn since_prefix_or_default(&self) -> &str {
        self.since_prefix
            .as_deref()
            .unwrap_or(crate::domain::elapsed::DEFAULT_SINCE_PREFIX)
    }

    /// Copyright year, or `current_year` if not set or not positive
    pub fn copyright_year_or(&self, current_year: i64) -> i64 {
        self.copyright_year
            .filter(|year| *year > 0)
            .unwrap_or(current_year)
    }

    /// Whether the photo + quote block is shown
    pub fn photo_text_block_enabled(&self) -> bool {
        self.modules.as_ref().and_then(|m| m.photo_text_block) != Some(false)
    }

    /// Whether the embedded video is shown
    pub fn youtube_background_enabled(&self) -> bool {
        self.modules.as_ref().and_then(|m| m.youtube_background) != Some(false)
    }

    /// Whether the wall clock line is shown
    pub fn live_clock_enabled(&self) -> bool {
        self.modules.as_ref().and_then(|m| m.live_clock) != Some(false)
    }

    /// Trimmed baseline, `None` if not set or blank
    pub fn baseline(&self) -> Option<&str> {
        non_blank(self.baseline.as_deref())
    }

    /// Photo source, or "./assets/photo.jpg" if not set or blank
    pub fn photo_src_or_default(&self) -> &str {
        non_blank(self.photo.as_ref().and_then(|p| p.src.as_deref())).unwrap_or(DEFAULT_PHOTO_SRC)
    }

    /// Photo alternative text, or empty
    pub fn photo_alt_or_default(&self) -> &str {
        self.photo
            .as_ref()
            .and_then(|p| p.alt.as_deref())
            .unwrap_or("")
    }

    /// Trimmed birth date, `None` if not set or blank
    pub fn birth_date(&self) -> Option<&str> {
        non_blank(self.birth_date.as_deref())
    }
}

fn merge_section<T>(base: Option<T>, other: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(merge(b, o)),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
