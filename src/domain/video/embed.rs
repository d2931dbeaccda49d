//! Privacy-respecting embed address

use std::fmt;

use url::Url;

use super::reference::VideoReference;

/// Embed endpoint on the no-cookie domain
pub const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

/// Player parameters appended to every embed address
pub const EMBED_PARAMS: &[(&str, &str)] = &[
    ("rel", "0"),
    ("modestbranding", "1"),
    ("playsinline", "1"),
];

/// Embed address for a recognized video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedUrl(Url);

impl EmbedUrl {
    /// Build the embed address; `None` when the reference is unrecognized
    pub fn for_video(video: &VideoReference) -> Option<Self> {
        let id = video.id()?;
        let mut url = Url::parse(EMBED_BASE).ok()?;
        url.path_segments_mut().ok()?.push(id);
        url.query_pairs_mut().extend_pairs(EMBED_PARAMS.iter().copied());
        Some(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmbedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
