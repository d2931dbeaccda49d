//! Landing page building blocks

pub mod clock;
pub mod media;
pub mod quote;
pub mod social;
pub mod splash;

pub use clock::clock_text;
pub use media::{Gallery, GalleryImage, GifBlock, DEFAULT_GIF_ALT, MAX_GALLERY_IMAGES};
pub use quote::{Quote, QuoteFragment};
pub use social::{ordered_links, SocialLink, SocialNetwork, ALL_NETWORKS};
pub use splash::SplashTiming;
