//! Grid viewport management for scrolling.
//!
//! The [`GridViewport`] tracks which card rows are visible and handles all
//! scroll operations. Geometry (columns per row, visible rows) is derived
//! from the terminal size during layout and pushed in by the model.

use std::ops::Range;

/// Manages the visible portion of the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewport {
    /// Cards per row. Never zero.
    columns: usize,
    /// Card rows that fit in the grid area.
    visible_rows: usize,
    /// First visible card row.
    offset: usize,
    /// Total card rows in the (filtered) grid.
    total_rows: usize,
}

impl GridViewport {
    pub const fn new(columns: usize, visible_rows: usize, total_rows: usize) -> Self {
        Self {
            columns: if columns == 0 { 1 } else { columns },
            visible_rows,
            offset: 0,
            total_rows,
        }
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Update geometry after a resize or pane toggle, clamping the offset.
    pub const fn set_geometry(&mut self, columns: usize, visible_rows: usize) {
        self.columns = if columns == 0 { 1 } else { columns };
        self.visible_rows = visible_rows;
        self.clamp_offset();
    }

    /// Update the row count after a filter change or re-assembly.
    pub const fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.clamp_offset();
    }

    /// Range of visible card rows.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.visible_rows).min(self.total_rows);
        self.offset..end
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub const fn scroll_down(&mut self, n: usize) {
        let next = self.offset.saturating_add(n);
        let max = self.max_offset();
        self.offset = if next > max { max } else { next };
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.visible_rows);
    }

    pub const fn page_down(&mut self) {
        self.scroll_down(self.visible_rows);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll the minimum amount needed to bring a card row on screen.
    pub const fn ensure_row_visible(&mut self, row: usize) {
        if self.visible_rows == 0 {
            self.offset = row;
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.visible_rows {
            self.offset = row + 1 - self.visible_rows;
        }
        self.clamp_offset();
    }

    /// Scroll percentage (0-100) for the status bar.
    pub fn scroll_percent(&self) -> u8 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max as f64) * 100.0).round() as u8
        }
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    const fn clamp_offset(&mut self) {
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
        }
    }
}

/// Number of card rows needed to hold `cards` in a grid of `columns`.
pub const fn rows_for(cards: usize, columns: usize) -> usize {
    if columns == 0 {
        cards
    } else {
        cards.div_ceil(columns)
    }
}
