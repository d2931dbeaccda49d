//! Build landing page use case

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::config::SiteConfig;
use crate::domain::elapsed::{self, ReferenceInstant, SinceLabel};
use crate::domain::page::{ordered_links, Gallery, GifBlock, Quote, SocialLink, SplashTiming};
use crate::domain::video::{self, VideoReference};

use super::ports::Clock;

/// Photo + quote block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub photo_src: String,
    pub photo_alt: String,
    pub quote: Option<Quote>,
}

/// Everything shown on the landing page, derived from one config snapshot
#[derive(Debug, Clone)]
pub struct LandingPage {
    pub reference: ReferenceInstant,
    pub since: SinceLabel,
    /// Instant shown on the wall clock line, `None` when the clock is off
    pub live_clock: Option<DateTime<Utc>>,
    pub baseline: Option<String>,
    pub copyright: String,
    pub content: Option<ContentBlock>,
    pub gallery: Option<Gallery>,
    pub video: Option<VideoReference>,
    pub gif: Option<GifBlock>,
    pub social_links: Vec<SocialLink>,
    pub splash: SplashTiming,
}

/// Machine-readable summary of the counter
#[derive(Debug, Clone, Serialize)]
pub struct SinceSummary {
    pub label: String,
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub reference: String,
    pub fallback: bool,
}

impl LandingPage {
    pub fn since_summary(&self) -> SinceSummary {
        let elapsed = self.since.elapsed();
        SinceSummary {
            label: self.since.to_string(),
            days: elapsed.days(),
            hours: elapsed.hours(),
            minutes: elapsed.minutes(),
            reference: self.reference.instant().to_rfc3339(),
            fallback: self.reference.is_fallback(),
        }
    }
}

/// Builds the landing page model from configuration and the current instant
pub struct BuildLandingUseCase<C: Clock> {
    clock: C,
}

impl<C: Clock> BuildLandingUseCase<C> {
    /// Create a new use case instance
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Assemble the page. Never fails: bad values fall back or hide their block.
    pub fn execute(&self, config: &SiteConfig) -> LandingPage {
        let now = self.clock.now();

        let reference = ReferenceInstant::parse_or(config.birth_date(), now);
        let since = SinceLabel::new(
            config.since_prefix_or_default(),
            elapsed::format(reference.instant(), now),
        );

        let copyright = format!(
            "© {} {}",
            config.copyright_year_or(i64::from(now.year())),
            config.brand_name_or_default()
        );

        let content = config.photo_text_block_enabled().then(|| ContentBlock {
            photo_src: config.photo_src_or_default().to_string(),
            photo_alt: config.photo_alt_or_default().to_string(),
            quote: Quote::from_config(config),
        });

        let video = if config.youtube_background_enabled() {
            resolve_video(config.youtube_url.as_deref().unwrap_or(""))
        } else {
            debug!("video module disabled");
            None
        };

        LandingPage {
            reference,
            since,
            live_clock: config.live_clock_enabled().then_some(now),
            baseline: config.baseline().map(str::to_string),
            copyright,
            content,
            gallery: Gallery::from_config(config.gallery.as_ref()),
            video,
            gif: GifBlock::from_config(config.gif.as_ref()),
            social_links: ordered_links(config.social_links.as_ref()),
            splash: SplashTiming::new(config.splash_min_duration_or_default()),
        }
    }
}

fn resolve_video(url: &str) -> Option<VideoReference> {
    let url = url.trim();
    if url.is_empty() {
        debug!("no video link configured");
        return None;
    }
    let reference = video::extract(url);
    if reference.is_recognized() {
        debug!(video_id = reference.platform_id(), "video link recognized");
        Some(reference)
    } else {
        warn!(url, "video link not recognized, hiding video");
        None
    }
}
