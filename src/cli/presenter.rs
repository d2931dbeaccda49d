//! CLI presenter for output formatting

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::LandingPage;
use crate::domain::elapsed::SinceLabel;
use crate::domain::page::{clock_text, Quote, QuoteFragment};
use crate::domain::video::EmbedUrl;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Show the brand on a spinner for `duration`
    pub async fn splash(&mut self, brand: &str, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        self.start_spinner(brand);
        tokio::time::sleep(duration).await;
        self.stop_spinner();
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout without newline
    pub fn output_inline(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Rewrite the counter line in place (watch mode)
    pub fn refresh_since(&self, label: &SinceLabel, clock: Option<DateTime<Utc>>) {
        self.output_inline(&format!("\r\x1b[2K{}", Self::format_status(label, clock)));
    }

    /// Print the whole landing card
    pub fn landing(&self, page: &LandingPage, embed: Option<&EmbedUrl>) {
        for line in Self::format_landing(page, embed) {
            self.output(&line);
        }
    }

    /// Styled counter line
    pub fn format_since(label: &SinceLabel) -> String {
        label.to_string().bold().to_string()
    }

    /// Wall clock in local time
    pub fn format_clock(now: DateTime<Utc>) -> String {
        clock_text(&now.with_timezone(&Local)).dimmed().to_string()
    }

    /// Counter followed by the wall clock when shown
    pub fn format_status(label: &SinceLabel, clock: Option<DateTime<Utc>>) -> String {
        match clock {
            Some(now) => format!("{}  {}", Self::format_since(label), Self::format_clock(now)),
            None => Self::format_since(label),
        }
    }

    /// Lines of the landing card, top to bottom
    pub fn format_landing(page: &LandingPage, embed: Option<&EmbedUrl>) -> Vec<String> {
        let mut lines = vec![Self::format_status(&page.since, page.live_clock)];
        if let Some(baseline) = &page.baseline {
            lines.push(baseline.italic().to_string());
        }
        lines.push(String::new());

        if let Some(content) = &page.content {
            let photo = if content.photo_alt.is_empty() {
                content.photo_src.clone()
            } else {
                format!("{} ({})", content.photo_src, content.photo_alt)
            };
            lines.push(format!("{} {}", "▣".cyan(), photo.dimmed()));
            if let Some(quote) = &content.quote {
                lines.extend(Self::format_quote(quote));
            }
            lines.push(String::new());
        }

        if let Some(gallery) = page.gallery.as_ref().filter(|g| !g.is_empty()) {
            for image in gallery.images() {
                lines.push(format!("{} {}", "▤".cyan(), image.src.dimmed()));
            }
            lines.push(String::new());
        }

        if let Some(embed) = embed {
            lines.push(format!("{} {}", "▶".red(), embed));
        }

        if let Some(gif) = &page.gif {
            lines.push(format!("{} {} ({})", "◎".magenta(), gif.src, gif.alt.dimmed()));
        }

        for link in &page.social_links {
            lines.push(format!("{} {}", format!("{:<10}", link.network.label()).cyan(), link.href));
        }

        lines.push(page.copyright.dimmed().to_string());
        lines
    }

    /// Quote lines with bold/italic runs
    pub fn format_quote(quote: &Quote) -> Vec<String> {
        let mut lines = vec![String::new()];
        for fragment in quote.fragments() {
            match fragment {
                QuoteFragment::LineBreak => lines.push(String::new()),
                QuoteFragment::Text {
                    text,
                    strong,
                    emphasis,
                } => {
                    let mut styled = text.normal();
                    if strong {
                        styled = styled.bold();
                    }
                    if emphasis {
                        styled = styled.italic();
                    }
                    if let Some(line) = lines.last_mut() {
                        line.push_str(&styled.to_string());
                    }
                }
            }
        }
        lines
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{BuildLandingUseCase, landing::tests::FixedClock};
    use crate::domain::config::{GalleryConfig, GifConfig, ModulesConfig, SiteConfig, SocialLinksConfig};
    use crate::domain::video::VideoReference;
    use chrono::{TimeZone, Utc};

    fn page() -> LandingPage {
        let config = SiteConfig::defaults().merge(SiteConfig {
            birth_date: Some("2026-10-15T12:00:00Z".to_string()),
            copyright_year: Some(2025),
            quote_text: Some("line one\nline two".to_string()),
            social_links: Some(SocialLinksConfig {
                linkedin: Some("https://www.linkedin.com/in/someone".to_string()),
                ..Default::default()
            }),
            modules: Some(ModulesConfig {
                live_clock: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        BuildLandingUseCase::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()))
            .execute(&config)
    }

    #[test]
    fn landing_lines_contain_all_blocks() {
        colored::control::set_override(false);
        let embed = EmbedUrl::for_video(&VideoReference::recognized("ABC123"));
        let lines = Presenter::format_landing(&page(), embed.as_ref());
        let text = lines.join("\n");

        assert!(lines[0].contains("Né depuis 1 jours 00 heures 00 minutes"));
        assert!(text.contains("./assets/photo.jpg"));
        assert!(text.contains("line one\nline two"));
        assert!(text.contains("youtube-nocookie.com/embed/ABC123"));
        assert!(text.contains("https://www.linkedin.com/in/someone"));
        assert_eq!(lines.last().unwrap(), "© 2025 Nadak");
    }

    #[test]
    fn landing_lines_show_media_blocks() {
        colored::control::set_override(false);
        let mut page = page();
        let config = SiteConfig {
            gallery: Some(GalleryConfig {
                enabled: Some(true),
                images: Some((1..=5).map(|i| format!("{}.jpg", i)).collect()),
            }),
            gif: Some(GifConfig {
                enabled: Some(true),
                url: Some("hello.gif".to_string()),
                alt: None,
            }),
            ..Default::default()
        };
        page.baseline = Some("Photographe".to_string());
        page.gallery = crate::domain::page::Gallery::from_config(config.gallery.as_ref());
        page.gif = crate::domain::page::GifBlock::from_config(config.gif.as_ref());

        let text = Presenter::format_landing(&page, None).join("\n");
        assert!(text.contains("Photographe"));
        assert!(text.contains("4.jpg"));
        assert!(!text.contains("5.jpg"));
        assert!(text.contains("hello.gif (GIF)"));
    }

    #[test]
    fn status_line_appends_clock() {
        colored::control::set_override(false);
        let page = page();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let status = Presenter::format_status(&page.since, Some(now));
        assert!(status.starts_with("Né depuis 1 jours 00 heures 00 minutes  "));
        assert!(status.ends_with(&clock_text(&now.with_timezone(&Local))));
        assert_eq!(Presenter::format_status(&page.since, None), page.since.to_string());
    }

    #[test]
    fn quote_line_breaks_split_lines() {
        colored::control::set_override(false);
        let quote = Quote::Html("<em>a</em><br><strong>b</strong>".to_string());
        assert_eq!(Presenter::format_quote(&quote), vec!["a".to_string(), "b".to_string()]);
    }
}
