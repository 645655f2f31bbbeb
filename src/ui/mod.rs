//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Grid scroll position and visible range management
//! - [`style`]: Theming and colors
//! - [`render`]: Drawing the guide pane, card grid and footer bars

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::render;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Model;

/// Card cell size in terminal cells, including the border.
pub const CARD_WIDTH: u16 = 18;
pub const CARD_HEIGHT: u16 = 4;

pub const GUIDE_WIDTH_PERCENT: u16 = 34;
pub const GRID_WIDTH_PERCENT: u16 = 66;

/// Screen regions for one frame. Computed identically by the renderer and
/// the mouse hit-testing so clicks always land on what is drawn.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub guide: Option<Rect>,
    pub grid: Rect,
    pub search: Option<Rect>,
    pub toast: Option<Rect>,
    pub status: Rect,
}

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(GUIDE_WIDTH_PERCENT),
            Constraint::Percentage(GRID_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Compute the frame layout for the current model state.
///
/// Footer bars stack from the bottom: status bar, then the search bar when
/// the input is focused, then the toast bar while one is showing.
pub fn layout(model: &Model, area: Rect) -> ScreenLayout {
    let search_active = model.search_active;
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(search_active) + u16::from(toast_active);

    let content = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let (guide, grid) = if model.guide_visible {
        let chunks = split_main_columns(content);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, content)
    };

    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    let search = search_active.then(|| Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    });
    let toast = toast_active.then(|| Rect {
        y: area.y
            + area
                .height
                .saturating_sub(2 + u16::from(search_active)),
        height: 1,
        ..area
    });

    ScreenLayout {
        guide,
        grid,
        search,
        toast,
        status,
    }
}

/// Cards per row for a grid area width.
pub const fn grid_columns(width: u16) -> usize {
    let cols = width / CARD_WIDTH;
    if cols == 0 { 1 } else { cols as usize }
}

/// Map a mouse position to the filtered card index under it, if any.
pub fn card_hit(model: &Model, area: Rect, col: u16, row: u16) -> Option<usize> {
    let grid = layout(model, area).grid;
    if col < grid.x || col >= grid.x + grid.width || row < grid.y || row >= grid.y + grid.height {
        return None;
    }

    let rel_col = ((col - grid.x) / CARD_WIDTH) as usize;
    if rel_col >= model.grid.columns() {
        // Click in the unused right margin of the grid area.
        return None;
    }
    let rel_row = ((row - grid.y) / CARD_HEIGHT) as usize;

    let grid_row = model.grid.offset() + rel_row;
    let idx = grid_row * model.grid.columns() + rel_col;
    (idx < model.filtered_cards().len()).then_some(idx)
}
