//! Plain data types produced by catalog assembly.

use serde::Serialize;

/// One resolved shortcode, ready to render as a card.
///
/// Cards are plain data — the UI layer decides how to draw them, and the
/// copy action always uses the exact literal from [`EmojiCard::copy_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCard {
    /// Shortcode without the delimiting colons (`smile`, `+1`).
    pub shortcode: String,
    /// Absolute image URL from the remote emoji map.
    pub image_url: String,
    /// Unicode glyph when the shortcode names a standard emoji.
    ///
    /// GitHub-only codes (`shipit`, `octocat`) have an image but no glyph.
    pub glyph: Option<String>,
}

impl EmojiCard {
    pub fn new(shortcode: impl Into<String>, image_url: impl Into<String>) -> Self {
        let shortcode = shortcode.into();
        let glyph = emojis::get_by_shortcode(&shortcode).map(|e| e.as_str().to_string());
        Self {
            shortcode,
            image_url: image_url.into(),
            glyph,
        }
    }

    /// The display label, `:shortcode:`.
    pub fn label(&self) -> String {
        format!(":{}:", self.shortcode)
    }

    /// The exact text placed on the clipboard — always the colon-delimited
    /// literal, including symbol characters (`:+1:`, `:-1:`).
    pub fn copy_text(&self) -> String {
        self.label()
    }

    /// Full visible text of the card, used for filtering.
    pub fn search_text(&self) -> String {
        match &self.glyph {
            Some(glyph) => format!("{glyph} {}", self.label()),
            None => self.label(),
        }
    }
}

/// One data row of the commit guide table from the markdown source.
///
/// Header and separator rows are stripped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRow {
    pub cells: Vec<String>,
}

impl GuideRow {
    /// Full visible text of the row, used for filtering.
    pub fn text(&self) -> String {
        self.cells.join("  ")
    }
}

/// Catalog counters, also embedded in the export report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Guide table rows in the markdown source.
    pub commits: usize,
    /// Rendered emoji cards.
    pub emojis: usize,
    pub total: usize,
}

impl Stats {
    pub const fn new(commits: usize, emojis: usize) -> Self {
        Self {
            commits,
            emojis,
            total: commits + emojis,
        }
    }
}
