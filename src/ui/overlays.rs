//! Modal overlays drawn on top of the main screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::style::Palette;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("j/k/h/l, arrows", "Move selection"),
    ("Enter, y, c", "Copy shortcode"),
    ("Click", "Copy card under cursor"),
    ("/, Ctrl+K", "Search"),
    ("Esc", "Clear search"),
    ("f / x", "Add / remove favorite"),
    ("e", "Export favorites as JSON"),
    ("r", "Reload emoji map"),
    ("t", "Toggle commit guide"),
    ("[ / ]", "Scroll commit guide"),
    ("Ctrl+/", "Toggle light/dark theme"),
    ("Space/b, PgDn/PgUp", "Page down / up"),
    ("g / G", "Top / bottom"),
    ("q, Ctrl+C", "Quit"),
];

pub(super) fn render_help(frame: &mut Frame, palette: &Palette) {
    let key_width = HELP_ENTRIES
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:key_width$}  "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let width = (key_width + 30).min(60) as u16;
    #[allow(clippy::cast_possible_truncation)]
    let height = HELP_ENTRIES.len() as u16 + 2;
    let area = centered_rect(width, height, frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (any key to close) ")
        .style(palette.base);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
