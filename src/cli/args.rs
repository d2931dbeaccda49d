//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// landing-page - personal landing card for the terminal
#[derive(Parser, Debug)]
#[command(name = "landing-page")]
#[command(version)]
#[command(about = "Personal landing card: time since birth, quote, video and social links")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file to use instead of the XDG default
    #[arg(long, global = true, value_name = "PATH", env = "LANDING_PAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub show: ShowArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for rendering the landing card (default action)
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Keep refreshing the counter until interrupted
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Refresh period in seconds for --watch (one second while the clock is shown)
    #[arg(long, value_name = "SECS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Skip the splash
    #[arg(long)]
    pub no_splash: bool,

    /// Birth date override (ISO-8601)
    #[arg(long, value_name = "ISO")]
    pub birth_date: Option<String>,

    /// Video link override
    #[arg(long, value_name = "URL")]
    pub youtube_url: Option<String>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the time elapsed since the birth date
    Since {
        /// Birth date override (ISO-8601)
        #[arg(long, value_name = "ISO")]
        birth_date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Extract the video identifier from a link
    VideoId {
        /// Video link (watch, short, embed or shorts URL)
        url: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "splash_min_duration_ms",
    "birth_date",
    "since_prefix",
    "brand_name",
    "baseline",
    "copyright_year",
    "quote_text",
    "quote_html",
    "youtube_url",
    "modules.photo_text_block",
    "modules.youtube_background",
    "modules.live_clock",
    "photo.src",
    "photo.alt",
    "social_links.facebook",
    "social_links.instagram",
    "social_links.linkedin",
    "social_links.tiktok",
    "gallery.enabled",
    "gallery.images",
    "gif.enabled",
    "gif.url",
    "gif.alt",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["landing-page"]);
        assert!(cli.command.is_none());
        assert!(!cli.show.watch);
        assert_eq!(cli.show.interval, 30);
        assert!(!cli.show.no_splash);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_show_flags() {
        let cli = Cli::parse_from([
            "landing-page",
            "--watch",
            "--interval",
            "5",
            "--no-splash",
            "--birth-date",
            "1994-10-18",
        ]);
        assert!(cli.show.watch);
        assert_eq!(cli.show.interval, 5);
        assert!(cli.show.no_splash);
        assert_eq!(cli.show.birth_date, Some("1994-10-18".to_string()));
    }

    #[test]
    fn cli_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["landing-page", "--interval", "0"]).is_err());
    }

    #[test]
    fn cli_parses_verbosity() {
        let cli = Cli::parse_from(["landing-page", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_video_id() {
        let cli = Cli::parse_from(["landing-page", "video-id", "https://youtu.be/ABC123", "--json"]);
        if let Some(Commands::VideoId { url, json }) = cli.command {
            assert_eq!(url, "https://youtu.be/ABC123");
            assert!(json);
        } else {
            panic!("Expected VideoId command");
        }
    }

    #[test]
    fn cli_parses_since() {
        let cli = Cli::parse_from(["landing-page", "since", "--birth-date", "2000-01-01"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Since { birth_date: Some(_), json: false })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["landing-page", "config", "set", "brand_name", "Nadak"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "brand_name");
            assert_eq!(value, "Nadak");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_accepts_negative_config_value() {
        let cli = Cli::parse_from(["landing-page", "config", "set", "copyright_year", "-3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Set { ref value, .. },
            }) if value == "-3"
        ));
    }

    #[test]
    fn cli_parses_global_config_path() {
        let cli = Cli::parse_from(["landing-page", "config", "path", "--config", "/tmp/site.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/site.toml")));
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("birth_date"));
        assert!(is_valid_config_key("social_links.tiktok"));
        assert!(is_valid_config_key("gallery.images"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
