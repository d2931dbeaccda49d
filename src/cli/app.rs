//! Command runners

use std::process::ExitCode;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::application::ports::{Clock, ConfigStore};
use crate::application::{BuildLandingUseCase, EmbedPlayer, SinceTicker};
use crate::domain::config::SiteConfig;
use crate::domain::video::{self, EmbedUrl, VideoReference};
use crate::infrastructure::{NoCookieEmbedBackend, SystemClock};

use super::args::ShowArgs;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Redraw period while the wall clock is shown
pub const LIVE_CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Render the landing card, optionally refreshing the counter until Ctrl-C
pub async fn run_show(config: SiteConfig, options: ShowArgs) -> ExitCode {
    let started = Instant::now();
    let mut presenter = Presenter::new();

    let config = config.merge(SiteConfig {
        birth_date: options.birth_date,
        youtube_url: options.youtube_url,
        ..Default::default()
    });

    let use_case = BuildLandingUseCase::new(SystemClock::new());
    let page = use_case.execute(&config);

    let embed = match &page.video {
        Some(video) => resolve_embed(video.clone(), &presenter).await,
        None => None,
    };

    if !options.no_splash {
        let wait = page.splash.remaining(started.elapsed());
        debug!(?wait, "splash");
        presenter
            .splash(config.brand_name_or_default(), wait)
            .await;
    }

    presenter.landing(&page, embed.as_ref());

    if options.watch {
        let shutdown = ShutdownSignal::new();
        shutdown.setup();

        let show_clock = page.live_clock.is_some();
        let period = if show_clock {
            LIVE_CLOCK_PERIOD
        } else {
            Duration::from_secs(options.interval)
        };
        let ticker = SinceTicker::new(
            SystemClock::new(),
            page.reference,
            config.since_prefix_or_default(),
        )
        .with_period(period);

        info!(period = ?ticker.period(), show_clock, "watching counter");
        presenter.output("");
        ticker
            .run(shutdown.wait(), |label| {
                presenter.refresh_since(label, show_clock.then(|| ticker.clock().now()))
            })
            .await;
        presenter.output("");
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load the embedded player and return its address. Failures only hide the video.
async fn resolve_embed(video: VideoReference, presenter: &Presenter) -> Option<EmbedUrl> {
    let player = EmbedPlayer::new(NoCookieEmbedBackend::new(), video);
    match player.ensure_ready().await {
        Ok(embed) => Some(embed.clone()),
        Err(e) => {
            presenter.warn(&format!("Video hidden: {}", e));
            None
        }
    }
}

/// Print the elapsed time since the configured (or overridden) birth date
pub fn run_since(config: SiteConfig, birth_date: Option<String>, json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let config = config.merge(SiteConfig {
        birth_date,
        ..Default::default()
    });

    let page = BuildLandingUseCase::new(SystemClock::new()).execute(&config);

    if json {
        return print_json(&presenter, &page.since_summary());
    }

    presenter.output(&page.since.to_string());
    ExitCode::from(EXIT_SUCCESS)
}

/// Machine-readable result of `video-id`
#[derive(Debug, Serialize)]
struct VideoIdOutput<'a> {
    #[serde(flatten)]
    reference: &'a VideoReference,
    embed_url: Option<String>,
}

/// Print the identifier and embed address of a video link.
/// Exits with an error when the link is not recognized.
pub fn run_video_id(url: &str, json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let reference = video::extract(url);
    let embed = EmbedUrl::for_video(&reference);

    if json {
        let output = VideoIdOutput {
            reference: &reference,
            embed_url: embed.as_ref().map(|e| e.to_string()),
        };
        let code = print_json(&presenter, &output);
        return if reference.is_recognized() {
            code
        } else {
            ExitCode::from(EXIT_ERROR)
        };
    }

    match embed {
        Some(embed) => {
            presenter.output(reference.platform_id());
            presenter.info(&format!("Embed: {}", embed));
            ExitCode::from(EXIT_SUCCESS)
        }
        None => {
            presenter.error(&format!("Not a recognized video link: {}", url));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn print_json<T: Serialize>(presenter: &Presenter, value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            presenter.output(&json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to encode JSON: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load the config file layered over defaults: defaults < file
pub async fn load_merged_config<S: ConfigStore>(store: &S) -> SiteConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("{} (using defaults)", e));
            SiteConfig::empty()
        }
    };

    SiteConfig::defaults().merge(file_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(load_merged_config(&store).await, SiteConfig::defaults());
    }

    #[tokio::test]
    async fn broken_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "brand_name = [").unwrap();
        let store = XdgConfigStore::with_path(path);
        assert_eq!(load_merged_config(&store).await, SiteConfig::defaults());
    }

    #[tokio::test]
    async fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "brand_name = \"Studio\"\n").unwrap();
        let store = XdgConfigStore::with_path(path);
        let config = load_merged_config(&store).await;
        assert_eq!(config.brand_name_or_default(), "Studio");
        assert_eq!(config.since_prefix_or_default(), "Né depuis");
    }

    #[test]
    fn video_id_json_shape() {
        let reference = VideoReference::recognized("ABC123");
        let output = VideoIdOutput {
            reference: &reference,
            embed_url: None,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["platform_id"], "ABC123");
        assert_eq!(json["recognized"], true);
        assert!(json["embed_url"].is_null());
    }
}
