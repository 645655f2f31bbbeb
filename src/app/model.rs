//! Application state.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::catalog::{Catalog, EmojiCard, GuideRow, Stats};
use crate::export::EXPORT_FILE_NAME;
use crate::filter;
use crate::remote::GITHUB_EMOJI_ENDPOINT;
use crate::storage::Storage;
use crate::ui;
use crate::ui::style::Theme;
use crate::ui::viewport::{GridViewport, rows_for};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

/// A transient notification in the footer. Showing a new toast replaces
/// the current one; there is never more than one on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Complete application state. Updated only through
/// [`update`](crate::app::update::update).
#[derive(Debug, Clone)]
pub struct Model {
    pub catalog: Catalog,
    /// Markdown source the catalog was assembled from.
    pub source: String,
    pub file_path: PathBuf,
    /// Emoji map endpoint used for fetch and reload.
    pub endpoint: String,
    pub storage: Storage,
    pub theme: Theme,
    pub query: String,
    /// Whether the search input has focus and captures keystrokes.
    pub search_active: bool,
    /// Selected position within the filtered card list.
    pub selected: usize,
    pub grid: GridViewport,
    pub guide_visible: bool,
    pub help_visible: bool,
    pub should_quit: bool,
    pub export_path: PathBuf,
    filtered_cards: Vec<usize>,
    filtered_guide: Vec<usize>,
    /// First visible guide row within the filtered list.
    guide_offset: usize,
    /// Guide rows that fit inside the pane borders.
    guide_visible_rows: usize,
    toast: Option<Toast>,
    terminal_width: u16,
    terminal_height: u16,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(
            PathBuf::new(),
            String::new(),
            Catalog::default(),
            Theme::default(),
            Storage::open_default(),
            GITHUB_EMOJI_ENDPOINT.to_string(),
            80,
            24,
        )
    }
}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file_path: PathBuf,
        source: String,
        catalog: Catalog,
        theme: Theme,
        storage: Storage,
        endpoint: String,
        terminal_width: u16,
        terminal_height: u16,
    ) -> Self {
        let mut model = Self {
            catalog,
            source,
            file_path,
            endpoint,
            storage,
            theme,
            query: String::new(),
            search_active: false,
            selected: 0,
            grid: GridViewport::new(1, 0, 0),
            guide_visible: true,
            help_visible: false,
            should_quit: false,
            export_path: PathBuf::from(EXPORT_FILE_NAME),
            filtered_cards: Vec::new(),
            filtered_guide: Vec::new(),
            guide_offset: 0,
            guide_visible_rows: 0,
            toast: None,
            terminal_width,
            terminal_height,
        };
        model.refresh_filter();
        model
    }

    pub fn terminal_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Filtered card indices into `catalog.cards()`, in catalog order.
    pub fn filtered_cards(&self) -> &[usize] {
        &self.filtered_cards
    }

    /// Filtered guide row indices into `catalog.guide()`, in source order.
    pub fn filtered_guide(&self) -> &[usize] {
        &self.filtered_guide
    }

    /// The card at a filtered position.
    pub fn visible_card(&self, filtered_idx: usize) -> Option<&EmojiCard> {
        self.filtered_cards
            .get(filtered_idx)
            .and_then(|&idx| self.catalog.cards().get(idx))
    }

    /// The guide row at a filtered position.
    pub fn visible_guide_row(&self, filtered_idx: usize) -> Option<&GuideRow> {
        self.filtered_guide
            .get(filtered_idx)
            .and_then(|&idx| self.catalog.guide().get(idx))
    }

    pub fn selected_card(&self) -> Option<&EmojiCard> {
        self.visible_card(self.selected)
    }

    pub const fn guide_offset(&self) -> usize {
        self.guide_offset
    }

    pub const fn guide_visible_rows(&self) -> usize {
        self.guide_visible_rows
    }

    pub fn guide_scroll_up(&mut self, n: usize) {
        self.guide_offset = self.guide_offset.saturating_sub(n);
    }

    pub fn guide_scroll_down(&mut self, n: usize) {
        self.guide_offset = (self.guide_offset + n).min(self.max_guide_offset());
    }

    fn max_guide_offset(&self) -> usize {
        self.filtered_guide
            .len()
            .saturating_sub(self.guide_visible_rows)
    }

    pub fn stats(&self) -> Stats {
        self.catalog.stats()
    }

    /// Whether the grid should show the "no results" placeholder: a
    /// non-empty query that matches nothing. Clearing the query removes it.
    pub fn no_results(&self) -> bool {
        self.filtered_cards.is_empty() && !self.query.is_empty()
    }

    /// Re-apply the query to both panes and bring the model back into a
    /// consistent state (selection clamped, viewport geometry refreshed).
    pub fn refresh_filter(&mut self) {
        let card_texts: Vec<String> = self
            .catalog
            .cards()
            .iter()
            .map(EmojiCard::search_text)
            .collect();
        self.filtered_cards =
            filter::filter_indices(card_texts.iter().map(String::as_str), &self.query);

        let guide_texts: Vec<String> =
            self.catalog.guide().iter().map(GuideRow::text).collect();
        self.filtered_guide =
            filter::filter_indices(guide_texts.iter().map(String::as_str), &self.query);

        self.selected = self
            .selected
            .min(self.filtered_cards.len().saturating_sub(1));
        self.relayout();
    }

    /// Replace the catalog wholesale, e.g. after a reload. The old grid is
    /// swapped out in one step so a render never sees a partial catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.selected = 0;
        self.guide_offset = 0;
        self.grid.go_to_top();
        self.refresh_filter();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.relayout();
    }

    /// Recompute viewport geometry from the current terminal size, pane
    /// visibility and filtered card count.
    pub fn relayout(&mut self) {
        let layout = ui::layout(self, self.terminal_area());
        let columns = ui::grid_columns(layout.grid.width);
        let visible_rows = (layout.grid.height / ui::CARD_HEIGHT) as usize;
        self.grid.set_geometry(columns, visible_rows);
        self.grid
            .set_total_rows(rows_for(self.filtered_cards.len(), columns));

        self.guide_visible_rows = layout
            .guide
            .map_or(0, |area| area.height.saturating_sub(2) as usize);
        self.guide_offset = self.guide_offset.min(self.max_guide_offset());
    }

    /// Move the selection by a column and row delta, scrolling as needed.
    pub fn move_selection(&mut self, dcol: isize, drow: isize) {
        let len = self.filtered_cards.len();
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        {
            let cols = self.grid.columns() as isize;
            let next = (self.selected as isize + dcol + drow * cols).clamp(0, len as isize - 1);
            self.selected = next as usize;
        }
        let row = self.selected / self.grid.columns();
        self.grid.ensure_row_visible(row);
    }

    /// Show a toast, replacing any current one. The footer grows a row
    /// while a toast is visible, so the layout is refreshed too.
    pub fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast = Some(Toast {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_DURATION,
        });
        self.relayout();
    }

    /// Drop the toast once its time is up. Called each pass of the event
    /// loop; returns whether it expired.
    pub fn expire_toast(&mut self) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.expires_at)
        {
            self.toast = None;
            self.relayout();
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }
}
