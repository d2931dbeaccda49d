//! Site configuration

pub mod site_config;

pub use site_config::{
    GalleryConfig, GifConfig, ModulesConfig, PhotoConfig, SiteConfig, SocialLinksConfig,
};
