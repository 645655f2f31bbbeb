//! Catalog assembly: markdown in, renderable cards out.
//!
//! `assemble` is the whole pipeline in one pure step: extract shortcodes,
//! resolve each against the emoji map, build one card per resolved code.
//! Shortcodes without a map entry are dropped without an error — the page
//! this replaces treated an unknown code as a non-event, and so do we
//! (they are still visible at debug level in the logs).

mod types;

pub use types::{EmojiCard, GuideRow, Stats};

use crate::remote::EmojiMap;
use crate::shortcode;

/// The assembled catalog: emoji cards plus the commit guide rows.
///
/// A catalog is immutable once assembled; re-assembly replaces the whole
/// value so the UI never observes a partially built grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<EmojiCard>,
    guide: Vec<GuideRow>,
}

impl Catalog {
    /// Build a catalog from markdown source and a resolved emoji map.
    ///
    /// Cards appear in the order their shortcodes are first discovered in
    /// the source. Codes missing from the map are silently skipped.
    pub fn assemble(markdown: &str, map: &EmojiMap) -> Self {
        let codes = shortcode::extract(markdown);
        let mut cards = Vec::with_capacity(codes.len());
        for code in codes {
            match map.get(&code) {
                Some(url) => cards.push(EmojiCard::new(code, url.clone())),
                None => tracing::debug!(shortcode = %code, "shortcode not in emoji map, skipping"),
            }
        }
        Self {
            cards,
            guide: guide_rows(markdown),
        }
    }

    pub fn cards(&self) -> &[EmojiCard] {
        &self.cards
    }

    pub fn guide(&self) -> &[GuideRow] {
        &self.guide
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.guide.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats::new(self.guide.len(), self.cards.len())
    }
}

/// Parse the data rows of markdown tables out of the source.
///
/// A row is any line shaped like `| a | b |`. Separator rows (`|---|---|`)
/// are dropped, and so is the header row immediately preceding one.
fn guide_rows(markdown: &str) -> Vec<GuideRow> {
    let lines: Vec<&str> = markdown.lines().map(str::trim).collect();
    let mut rows = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !is_table_row(line) || is_separator_row(line) {
            continue;
        }
        // Header row: the next line is the separator.
        if lines.get(idx + 1).is_some_and(|next| is_separator_row(next)) {
            continue;
        }
        let cells: Vec<String> = line
            .trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect();
        rows.push(GuideRow { cells });
    }

    rows
}

fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

fn is_separator_row(line: &str) -> bool {
    if !is_table_row(line) {
        return false;
    }
    let inner = line.trim_matches('|');
    !inner.is_empty()
        && inner.contains('-')
        && inner
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|' | ' '))
}
