//! Quote block value object
//!
//! The quote is either plain text (newlines kept) or a minimal markup subset:
//! `<strong>`/`<b>`, `<em>`/`<i>`, `<br>` and a handful of entities. Other tags
//! are dropped; their text content is kept.

use crate::domain::config::SiteConfig;

/// Quote content as configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
    Html(String),
    Plain(String),
}

/// A styled run of quote text, or a line break
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFragment {
    Text {
        text: String,
        strong: bool,
        emphasis: bool,
    },
    LineBreak,
}

impl QuoteFragment {
    fn text(text: impl Into<String>, strong: bool, emphasis: bool) -> Self {
        Self::Text {
            text: text.into(),
            strong,
            emphasis,
        }
    }
}

impl Quote {
    /// Pick the quote from config: markup wins over plain text, blanks are ignored
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        let html = config.quote_html.as_deref().map(str::trim).unwrap_or("");
        if !html.is_empty() {
            return Some(Self::Html(html.to_string()));
        }
        let text = config.quote_text.as_deref().map(str::trim).unwrap_or("");
        if !text.is_empty() {
            return Some(Self::Plain(text.to_string()));
        }
        None
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }

    /// Break the quote into styled fragments
    pub fn fragments(&self) -> Vec<QuoteFragment> {
        match self {
            Self::Plain(text) => plain_fragments(text),
            Self::Html(markup) => markup_fragments(markup),
        }
    }

    /// Text content without styling, line breaks as `\n`
    pub fn to_plain_text(&self) -> String {
        self.fragments()
            .into_iter()
            .map(|fragment| match fragment {
                QuoteFragment::Text { text, .. } => text,
                QuoteFragment::LineBreak => "\n".to_string(),
            })
            .collect()
    }
}

fn plain_fragments(text: &str) -> Vec<QuoteFragment> {
    let mut fragments = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            fragments.push(QuoteFragment::LineBreak);
        }
        if !line.is_empty() {
            fragments.push(QuoteFragment::text(line, false, false));
        }
    }
    fragments
}

fn markup_fragments(markup: &str) -> Vec<QuoteFragment> {
    let mut fragments = Vec::new();
    let mut strong = 0usize;
    let mut emphasis = 0usize;
    let mut rest = markup;

    while !rest.is_empty() {
        let Some(open) = rest.find('<') else {
            push_text(&mut fragments, rest, strong > 0, emphasis > 0);
            break;
        };
        push_text(&mut fragments, &rest[..open], strong > 0, emphasis > 0);

        let Some(close) = rest[open..].find('>') else {
            // Unterminated tag: keep it as text
            push_text(&mut fragments, &rest[open..], strong > 0, emphasis > 0);
            break;
        };
        let tag = &rest[open + 1..open + close];
        rest = &rest[open + close + 1..];

        let tag = tag.trim().trim_end_matches('/').trim().to_ascii_lowercase();
        let (closing, name) = match tag.strip_prefix('/') {
            Some(name) => (true, name.trim().to_string()),
            None => (false, tag.split_whitespace().next().unwrap_or("").to_string()),
        };

        match (name.as_str(), closing) {
            ("br", _) => fragments.push(QuoteFragment::LineBreak),
            ("strong" | "b", false) => strong += 1,
            ("strong" | "b", true) => strong = strong.saturating_sub(1),
            ("em" | "i", false) => emphasis += 1,
            ("em" | "i", true) => emphasis = emphasis.saturating_sub(1),
            _ => {}
        }
    }

    fragments
}

fn push_text(fragments: &mut Vec<QuoteFragment>, raw: &str, strong: bool, emphasis: bool) {
    if raw.is_empty() {
        return;
    }
    let text = decode_entities(raw);
    // Merge with the previous run when the style matches
    if let Some(QuoteFragment::Text {
        text: prev,
        strong: s,
        emphasis: e,
    }) = fragments.last_mut()
    {
        if *s == strong && *e == emphasis {
            prev.push_str(&text);
            return;
        }
    }
    fragments.push(QuoteFragment::text(text, strong, emphasis));
}

fn decode_entities(raw: &str) -> String {
    const ENTITIES: &[(&str, &str)] = &[
        ("&nbsp;", "\u{a0}"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&laquo;", "«"),
        ("&raquo;", "»"),
        // Last so "&amp;lt;" decodes to "&lt;"
        ("&amp;", "&"),
    ];
    ENTITIES
        .iter()
        .fold(raw.to_string(), |text, (entity, replacement)| {
            text.replace(entity, replacement)
        })
}
