//! Footer bars: search input, toast and status line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, Toast, ToastLevel};

use super::style::Palette;

pub(super) fn render_search_bar(frame: &mut Frame, model: &Model, palette: &Palette, area: Rect) {
    let shown = model.filtered_cards().len();
    let total = model.catalog.cards().len();
    let line = Line::from(vec![
        Span::raw(" Search: "),
        Span::raw(model.query.clone()),
        Span::raw("_"),
        Span::raw(format!("  ({shown}/{total} shown, Enter to keep, Esc to clear)")),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.search_bar), area);
}

pub(super) fn render_toast_bar(frame: &mut Frame, toast: &Toast, palette: &Palette, area: Rect) {
    let style = match toast.level {
        ToastLevel::Info => palette.toast_info,
        ToastLevel::Warning => palette.toast_warning,
        ToastLevel::Error => palette.toast_error,
    };
    let line = Line::from(format!(" {}", toast.message));
    frame.render_widget(Paragraph::new(line).style(style), area);
}

/// One-line summary at the bottom: file, counts, active filter, theme and
/// scroll position.
pub(super) fn render_status_bar(frame: &mut Frame, model: &Model, palette: &Palette, area: Rect) {
    let stats = model.stats();
    let file = model
        .file_path
        .file_name()
        .map_or_else(|| model.file_path.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        });

    let mut left = format!(
        " {file} | {} emojis, {} commits ({} total)",
        stats.emojis, stats.commits, stats.total
    );
    if !model.query.is_empty() {
        left.push_str(&format!(
            " | filter: {} ({}/{})",
            model.query,
            model.filtered_cards().len(),
            model.catalog.cards().len()
        ));
    }

    let right = format!("{} | {}% ? help ", model.theme, model.grid.scroll_percent());

    let width = area.width as usize;
    // The selected card's image URL rides along when there is room for it.
    if let Some(card) = model.selected_card() {
        let with_url = format!("{left} | {}", card.image_url);
        if with_url.width() + right.width() < width {
            left = with_url;
        }
    }
    let used = left.width() + right.width();
    let padding = width.saturating_sub(used);
    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.status_bar), area);
}
