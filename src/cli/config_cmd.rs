//! Config command handler

use url::Url;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    GalleryConfig, GifConfig, ModulesConfig, PhotoConfig, SiteConfig, SocialLinksConfig,
};
use crate::domain::elapsed::ReferenceInstant;
use crate::domain::error::ConfigError;
use crate::domain::video;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;
    let value = get_value(&config, key);
    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = get_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }
    Ok(())
}

/// Read a config value by dotted key
fn get_value(config: &SiteConfig, key: &str) -> Option<String> {
    let modules = config.modules.as_ref();
    let photo = config.photo.as_ref();
    let links = config.social_links.as_ref();
    let gallery = config.gallery.as_ref();
    let gif = config.gif.as_ref();

    match key {
        "splash_min_duration_ms" => config.splash_min_duration_ms.map(|v| v.to_string()),
        "birth_date" => config.birth_date.clone(),
        "since_prefix" => config.since_prefix.clone(),
        "brand_name" => config.brand_name.clone(),
        "baseline" => config.baseline.clone(),
        "copyright_year" => config.copyright_year.map(|v| v.to_string()),
        "quote_text" => config.quote_text.clone(),
        "quote_html" => config.quote_html.clone(),
        "youtube_url" => config.youtube_url.clone(),
        "modules.photo_text_block" => modules.and_then(|m| m.photo_text_block).map(|b| b.to_string()),
        "modules.youtube_background" => modules.and_then(|m| m.youtube_background).map(|b| b.to_string()),
        "modules.live_clock" => modules.and_then(|m| m.live_clock).map(|b| b.to_string()),
        "photo.src" => photo.and_then(|p| p.src.clone()),
        "photo.alt" => photo.and_then(|p| p.alt.clone()),
        "social_links.facebook" => links.and_then(|l| l.facebook.clone()),
        "social_links.instagram" => links.and_then(|l| l.instagram.clone()),
        "social_links.linkedin" => links.and_then(|l| l.linkedin.clone()),
        "social_links.tiktok" => links.and_then(|l| l.tiktok.clone()),
        "gallery.enabled" => gallery.and_then(|g| g.enabled).map(|b| b.to_string()),
        "gallery.images" => gallery.and_then(|g| g.images.as_ref()).map(|images| images.join(", ")),
        "gif.enabled" => gif.and_then(|g| g.enabled).map(|b| b.to_string()),
        "gif.url" => gif.and_then(|g| g.url.clone()),
        "gif.alt" => gif.and_then(|g| g.alt.clone()),
        _ => None,
    }
}

/// Write a validated config value by dotted key
fn set_value(config: &mut SiteConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let text = Some(value.to_string());

    match key {
        "splash_min_duration_ms" => config.splash_min_duration_ms = Some(parse_int(key, value)?),
        "birth_date" => config.birth_date = text,
        "since_prefix" => config.since_prefix = text,
        "brand_name" => config.brand_name = text,
        "baseline" => config.baseline = text,
        "copyright_year" => config.copyright_year = Some(parse_int(key, value)?),
        "quote_text" => config.quote_text = text,
        "quote_html" => config.quote_html = text,
        "youtube_url" => config.youtube_url = text,
        "modules.photo_text_block" => {
            config
                .modules
                .get_or_insert_with(ModulesConfig::default)
                .photo_text_block = Some(parse_bool_value(key, value)?)
        }
        "modules.youtube_background" => {
            config
                .modules
                .get_or_insert_with(ModulesConfig::default)
                .youtube_background = Some(parse_bool_value(key, value)?)
        }
        "modules.live_clock" => {
            config
                .modules
                .get_or_insert_with(ModulesConfig::default)
                .live_clock = Some(parse_bool_value(key, value)?)
        }
        "photo.src" => config.photo.get_or_insert_with(PhotoConfig::default).src = text,
        "photo.alt" => config.photo.get_or_insert_with(PhotoConfig::default).alt = text,
        "social_links.facebook" => {
            config
                .social_links
                .get_or_insert_with(SocialLinksConfig::default)
                .facebook = text
        }
        "social_links.instagram" => {
            config
                .social_links
                .get_or_insert_with(SocialLinksConfig::default)
                .instagram = text
        }
        "social_links.linkedin" => {
            config
                .social_links
                .get_or_insert_with(SocialLinksConfig::default)
                .linkedin = text
        }
        "social_links.tiktok" => {
            config
                .social_links
                .get_or_insert_with(SocialLinksConfig::default)
                .tiktok = text
        }
        "gallery.enabled" => {
            config
                .gallery
                .get_or_insert_with(GalleryConfig::default)
                .enabled = Some(parse_bool_value(key, value)?)
        }
        "gallery.images" => {
            config
                .gallery
                .get_or_insert_with(GalleryConfig::default)
                .images = Some(parse_list(value))
        }
        "gif.enabled" => {
            config.gif.get_or_insert_with(GifConfig::default).enabled =
                Some(parse_bool_value(key, value)?)
        }
        "gif.url" => config.gif.get_or_insert_with(GifConfig::default).url = text,
        "gif.alt" => config.gif.get_or_insert_with(GifConfig::default).alt = text,
        _ => return Err(unknown_key(key)),
    }

    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "splash_min_duration_ms" => {
            if parse_int(key, value)? < 0 {
                return Err(invalid("Value must not be negative".to_string()));
            }
        }
        "copyright_year" => {
            if parse_int(key, value)? <= 0 {
                return Err(invalid("Value must be a positive year".to_string()));
            }
        }
        "birth_date" => {
            value
                .parse::<ReferenceInstant>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "youtube_url" => {
            // Blank hides the video
            if !value.trim().is_empty() && !video::extract(value.trim()).is_recognized() {
                return Err(invalid(format!("Not a recognized video link: '{}'", value)));
            }
        }
        "modules.photo_text_block"
        | "modules.youtube_background"
        | "modules.live_clock"
        | "gallery.enabled"
        | "gif.enabled" => {
            parse_bool_value(key, value)?;
        }
        k if k.starts_with("social_links.") => {
            // Blank hides the link
            if !value.trim().is_empty() && !is_web_url(value.trim()) {
                return Err(invalid(format!("Invalid value '{}'. Expected an http(s) URL", value)));
            }
        }
        _ => {} // free text
    }
    Ok(())
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.scheme() == "http" || url.scheme() == "https")
        .unwrap_or(false)
}

/// Comma-separated list, blanks dropped
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_int(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Invalid value '{}'. Expected an integer", value),
        })
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
