//! Frame rendering: guide pane, card grid, footer bars and overlays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;

use super::style::{Palette, palette};
use super::{CARD_HEIGHT, CARD_WIDTH, overlays, status};

/// Draw one full frame from the model.
pub fn render(model: &Model, frame: &mut Frame) {
    let pal = palette(model.theme);
    frame.render_widget(Block::default().style(pal.base), frame.area());

    let layout = super::layout(model, frame.area());
    if let Some(area) = layout.guide {
        render_guide(frame, model, &pal, area);
    }
    render_grid(frame, model, &pal, layout.grid);

    if let Some(area) = layout.search {
        status::render_search_bar(frame, model, &pal, area);
    }
    if let (Some(toast), Some(area)) = (model.active_toast(), layout.toast) {
        status::render_toast_bar(frame, toast, &pal, area);
    }
    status::render_status_bar(frame, model, &pal, layout.status);

    if model.help_visible {
        overlays::render_help(frame, &pal);
    }
}

/// The commit guide: one line per filtered table row.
fn render_guide(frame: &mut Frame, model: &Model, pal: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pal.guide_border)
        .title(" Commit Guide ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.filtered_guide().is_empty() {
        let text = if model.catalog.guide().is_empty() {
            "No guide table in source".to_string()
        } else {
            "No matching rows".to_string()
        };
        frame.render_widget(Paragraph::new(text).style(pal.placeholder), inner);
        return;
    }

    let lines: Vec<Line> = model
        .filtered_guide()
        .iter()
        .skip(model.guide_offset())
        .take(inner.height as usize)
        .filter_map(|&idx| model.catalog.guide().get(idx))
        .map(|row| Line::styled(row.text(), pal.guide_row))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// The emoji card grid, or a placeholder when there is nothing to draw.
#[allow(clippy::cast_possible_truncation)]
fn render_grid(frame: &mut Frame, model: &Model, pal: &Palette, area: Rect) {
    if model.catalog.cards().is_empty() {
        let lines = vec![
            Line::raw(""),
            Line::raw("No emojis to show."),
            Line::raw("Check the connection and press r to reload."),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(pal.placeholder)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    if model.no_results() {
        let text = format!("No emojis found matching \"{}\"", model.query);
        let lines = vec![Line::raw(""), Line::raw(text)];
        frame.render_widget(
            Paragraph::new(lines)
                .style(pal.placeholder)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let columns = model.grid.columns();
    let offset = model.grid.offset();
    for row in model.grid.visible_range() {
        for col in 0..columns {
            let idx = row * columns + col;
            let Some(card) = model.visible_card(idx) else {
                break;
            };
            let x = area.x + col as u16 * CARD_WIDTH;
            let y = area.y + (row - offset) as u16 * CARD_HEIGHT;
            if x + CARD_WIDTH > area.x + area.width || y + CARD_HEIGHT > area.y + area.height {
                continue;
            }

            let selected = idx == model.selected;
            let block = Block::default().borders(Borders::ALL).border_style(if selected {
                pal.card_border_selected
            } else {
                pal.card_border
            });
            let glyph = card.glyph.clone().unwrap_or_else(|| "·".to_string());
            let lines = vec![
                Line::raw(glyph),
                Line::styled(
                    card.label(),
                    if selected {
                        pal.card_label_selected
                    } else {
                        pal.card_label
                    },
                ),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .alignment(Alignment::Center),
                Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT),
            );
        }
    }
}
