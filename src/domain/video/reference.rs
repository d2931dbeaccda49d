//! Video reference value object and identifier extraction

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

/// Host fragment of the platform's short-link domain
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Host fragment of the platform's main domain
pub const MAIN_HOST: &str = "youtube.com";

/// Query parameter carrying the identifier on watch pages
const WATCH_PARAM: &str = "v";

/// Path markers followed by the identifier
const EMBED_SEGMENT: &str = "embed";
const SHORTS_SEGMENT: &str = "shorts";

/// Result of classifying a URL against the known video platform.
/// An unrecognized reference always carries an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct VideoReference {
    platform_id: String,
    recognized: bool,
}

impl VideoReference {
    /// Create a recognized reference
    pub fn recognized(platform_id: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            recognized: true,
        }
    }

    /// Create the unrecognized reference
    pub fn unrecognized() -> Self {
        Self::default()
    }

    /// Platform identifier (empty when unrecognized)
    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    /// Whether the input matched the platform's addressing scheme
    pub fn is_recognized(&self) -> bool {
        self.recognized
    }

    /// Identifier if recognized
    pub fn id(&self) -> Option<&str> {
        self.recognized.then_some(self.platform_id.as_str())
    }
}

/// Extract the platform identifier from an arbitrary string.
///
/// Total: malformed input maps to [`VideoReference::unrecognized`]. Strings
/// that do not parse as absolute URLs are never taken as literal identifiers.
pub fn extract(input: &str) -> VideoReference {
    let Ok(url) = Url::parse(input) else {
        return VideoReference::unrecognized();
    };
    let Some(host) = url.host_str() else {
        return VideoReference::unrecognized();
    };

    // Percent-encoded bytes that are not UTF-8 never name a video
    let Some(segments) = decoded_segments(&url) else {
        return VideoReference::unrecognized();
    };

    if host.contains(SHORT_LINK_HOST) {
        return segments
            .into_iter()
            .next()
            .map(VideoReference::recognized)
            .unwrap_or_default();
    }

    if host.contains(MAIN_HOST) {
        let watch_id = url
            .query_pairs()
            .find(|(key, _)| key == WATCH_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty() && !value.contains(char::REPLACEMENT_CHARACTER));
        if let Some(id) = watch_id {
            return VideoReference::recognized(id);
        }

        return segment_after(&segments, EMBED_SEGMENT)
            .or_else(|| segment_after(&segments, SHORTS_SEGMENT))
            .map(VideoReference::recognized)
            .unwrap_or_default();
    }

    VideoReference::unrecognized()
}

/// Non-empty, percent-decoded path segments.
/// `None` when a segment does not decode to UTF-8.
fn decoded_segments(url: &Url) -> Option<Vec<String>> {
    let Some(segments) = url.path_segments() else {
        return Some(Vec::new());
    };
    let mut decoded = Vec::new();
    for segment in segments.filter(|s| !s.is_empty()) {
        let segment = percent_decode_str(segment).decode_utf8().ok()?;
        if !segment.is_empty() {
            decoded.push(segment.into_owned());
        }
    }
    Some(decoded)
}

/// Segment immediately following the first occurrence of `marker`
fn segment_after<'a>(segments: &'a [String], marker: &str) -> Option<&'a str> {
    let index = segments.iter().position(|s| s == marker)?;
    segments.get(index + 1).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(url: &str) -> Option<String> {
        extract(url).id().map(str::to_string)
    }

    #[test]
    fn short_link() {
        let reference = extract("https://youtu.be/ABC123");
        assert!(reference.is_recognized());
        assert_eq!(reference.platform_id(), "ABC123");
    }

    #[test]
    fn short_link_with_tracking_query() {
        assert_eq!(
            id_of("https://youtu.be/4zejNFhvAGo?si=zWtSohOVeLqZHExA"),
            Some("4zejNFhvAGo".to_string())
        );
    }

    #[test]
    fn short_link_takes_first_segment_only() {
        assert_eq!(id_of("https://youtu.be/ABC123/extra"), Some("ABC123".to_string()));
    }

    #[test]
    fn short_link_without_path_is_unrecognized() {
        assert_eq!(extract("https://youtu.be/"), VideoReference::unrecognized());
        assert_eq!(extract("https://youtu.be"), VideoReference::unrecognized());
    }

    #[test]
    fn watch_page() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=XYZ789&t=5"),
            Some("XYZ789".to_string())
        );
    }

    #[test]
    fn watch_param_not_first() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?feature=share&v=XYZ789"),
            Some("XYZ789".to_string())
        );
    }

    #[test]
    fn empty_watch_param_falls_through() {
        assert_eq!(extract("https://www.youtube.com/watch?v="), VideoReference::unrecognized());
        assert_eq!(
            id_of("https://www.youtube.com/embed/QQQ111?v="),
            Some("QQQ111".to_string())
        );
    }

    #[test]
    fn embed_path() {
        assert_eq!(
            id_of("https://www.youtube.com/embed/QQQ111"),
            Some("QQQ111".to_string())
        );
    }

    #[test]
    fn shorts_path() {
        assert_eq!(
            id_of("https://www.youtube.com/shorts/SHORT1"),
            Some("SHORT1".to_string())
        );
    }

    #[test]
    fn trailing_slashes() {
        assert_eq!(id_of("https://www.youtube.com/embed/QQQ111/"), Some("QQQ111".to_string()));
        assert_eq!(id_of("https://www.youtube.com/shorts//SHORT1//"), Some("SHORT1".to_string()));
        assert_eq!(id_of("https://youtu.be//ABC123/"), Some("ABC123".to_string()));
    }

    #[test]
    fn percent_encoded_segments_are_decoded() {
        assert_eq!(id_of("https://www.youtube.com/%65mbed/QQQ111"), Some("QQQ111".to_string()));
        assert_eq!(id_of("https://youtu.be/AB%2DC"), Some("AB-C".to_string()));
    }

    #[test]
    fn invalid_utf8_encoding_is_unrecognized() {
        assert_eq!(extract("https://youtu.be/AB%FFC"), VideoReference::unrecognized());
        assert_eq!(
            extract("https://www.youtube.com/embed/AB%C3%28C"),
            VideoReference::unrecognized()
        );
        assert_eq!(
            extract("https://www.youtube.com/watch?v=AB%FFC"),
            VideoReference::unrecognized()
        );
    }

    #[test]
    fn marker_without_following_segment() {
        assert_eq!(extract("https://www.youtube.com/embed/"), VideoReference::unrecognized());
        assert_eq!(
            id_of("https://www.youtube.com/embed/shorts/S1"),
            Some("shorts".to_string())
        );
    }

    #[test]
    fn main_host_other_paths_are_unrecognized() {
        assert_eq!(extract("https://www.youtube.com/"), VideoReference::unrecognized());
        assert_eq!(
            extract("https://www.youtube.com/channel/UC123"),
            VideoReference::unrecognized()
        );
    }

    #[test]
    fn mobile_and_bare_hosts() {
        assert_eq!(id_of("https://m.youtube.com/watch?v=M1"), Some("M1".to_string()));
        assert_eq!(id_of("http://youtube.com/embed/E1"), Some("E1".to_string()));
    }

    #[test]
    fn host_match_is_case_insensitive() {
        assert_eq!(id_of("https://WWW.YouTube.COM/watch?v=Case"), Some("Case".to_string()));
    }

    #[test]
    fn other_hosts_are_unrecognized() {
        assert_eq!(extract("https://vimeo.com/12345"), VideoReference::unrecognized());
        assert_eq!(
            extract("https://example.com/watch?v=XYZ789"),
            VideoReference::unrecognized()
        );
    }

    #[test]
    fn malformed_input_is_unrecognized() {
        assert_eq!(extract(""), VideoReference::unrecognized());
        assert_eq!(extract("   "), VideoReference::unrecognized());
        assert_eq!(extract("ABC123"), VideoReference::unrecognized());
        assert_eq!(extract("youtube.com/watch?v=XYZ"), VideoReference::unrecognized());
        assert_eq!(extract("mailto:someone@youtube.com"), VideoReference::unrecognized());
    }

    #[test]
    fn unrecognized_has_empty_id() {
        let reference = extract("not a url");
        assert!(!reference.is_recognized());
        assert_eq!(reference.platform_id(), "");
        assert_eq!(reference.id(), None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let url = "https://www.youtube.com/watch?v=XYZ789&t=5";
        assert_eq!(extract(url), extract(url));
    }
}
