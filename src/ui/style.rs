//! Theming and color definitions.
//!
//! Two fixed themes, `light` and `dark`. The palette maps the semantic
//! parts of the screen (cards, bars, toasts) to concrete styles so the
//! render code never mentions a color directly.

use std::fmt;

use ratatui::style::{Color, Modifier, Style};

/// The two-state theme preference. Persisted as `"light"` / `"dark"`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Strict two-state flip.
    pub const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized is `None`; the
    /// storage layer falls back to the default (dark) in that case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete styles for each screen element under one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub base: Style,
    pub card_border: Style,
    pub card_border_selected: Style,
    pub card_label: Style,
    pub card_label_selected: Style,
    pub guide_border: Style,
    pub guide_row: Style,
    pub placeholder: Style,
    pub search_bar: Style,
    pub status_bar: Style,
    pub toast_info: Style,
    pub toast_warning: Style,
    pub toast_error: Style,
}

/// Look up the palette for a theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            base: Style::default().bg(Color::Reset).fg(Color::White),
            card_border: Style::default().fg(Color::Indexed(240)),
            card_border_selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(Color::White),
            card_label_selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            guide_border: Style::default().fg(Color::Indexed(240)),
            guide_row: Style::default().fg(Color::Gray),
            placeholder: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::ITALIC),
            search_bar: Style::default().bg(Color::Blue).fg(Color::White),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            toast_info: Style::default().bg(Color::DarkGray).fg(Color::White),
            toast_warning: Style::default().bg(Color::Yellow).fg(Color::Black),
            toast_error: Style::default().bg(Color::Red).fg(Color::White),
        },
        Theme::Light => Palette {
            base: Style::default().bg(Color::Reset).fg(Color::Black),
            card_border: Style::default().fg(Color::Indexed(250)),
            card_border_selected: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(Color::Black),
            card_label_selected: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            guide_border: Style::default().fg(Color::Indexed(250)),
            guide_row: Style::default().fg(Color::Indexed(238)),
            placeholder: Style::default()
                .fg(Color::Indexed(244))
                .add_modifier(Modifier::ITALIC),
            search_bar: Style::default().bg(Color::Indexed(24)).fg(Color::White),
            status_bar: Style::default().bg(Color::Indexed(252)).fg(Color::Black),
            toast_info: Style::default().bg(Color::Indexed(252)).fg(Color::Black),
            toast_warning: Style::default().bg(Color::Yellow).fg(Color::Black),
            toast_error: Style::default().bg(Color::Red).fg(Color::White),
        },
    }
}
