//! Social network links

use std::fmt;

use serde::Serialize;

use crate::domain::config::SocialLinksConfig;

/// Display order of social links
pub const ALL_NETWORKS: &[SocialNetwork] = &[
    SocialNetwork::Facebook,
    SocialNetwork::Instagram,
    SocialNetwork::LinkedIn,
    SocialNetwork::TikTok,
];

/// Supported social networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    LinkedIn,
    TikTok,
}

impl SocialNetwork {
    /// Config key of this network
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::LinkedIn => "linkedin",
            Self::TikTok => "tiktok",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::TikTok => "TikTok",
        }
    }

    fn configured<'a>(&self, config: &'a SocialLinksConfig) -> Option<&'a str> {
        match self {
            Self::Facebook => config.facebook.as_deref(),
            Self::Instagram => config.instagram.as_deref(),
            Self::LinkedIn => config.linkedin.as_deref(),
            Self::TikTok => config.tiktok.as_deref(),
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A visible social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: String,
}

/// Configured links in display order, trimmed, blanks skipped
pub fn ordered_links(config: Option<&SocialLinksConfig>) -> Vec<SocialLink> {
    let Some(config) = config else {
        return Vec::new();
    };
    ALL_NETWORKS
        .iter()
        .filter_map(|network| {
            let href = network.configured(config)?.trim();
            (!href.is_empty()).then(|| SocialLink {
                network: *network,
                href: href.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_display_order_and_skips_blanks() {
        let config = SocialLinksConfig {
            tiktok: Some("https://www.tiktok.com/@someone".to_string()),
            facebook: Some(" https://www.facebook.com/someone ".to_string()),
            instagram: Some("   ".to_string()),
            linkedin: None,
        };
        let links = ordered_links(Some(&config));
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].network, SocialNetwork::Facebook);
        assert_eq!(links[0].href, "https://www.facebook.com/someone");
        assert_eq!(links[1].network, SocialNetwork::TikTok);
    }

    #[test]
    fn no_section_means_no_links() {
        assert!(ordered_links(None).is_empty());
    }

    #[test]
    fn all_networks_constant() {
        assert_eq!(ALL_NETWORKS.len(), 4);
        assert_eq!(SocialNetwork::LinkedIn.to_string(), "linkedin");
    }
}
