//! Input handling: terminal events to messages.
//!
//! Pure translation — no state changes happen here, the returned message
//! goes through `update` like any other.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui;

use super::model::Model;
use super::update::Message;

/// Map a terminal event to a message, if it means anything right now.
pub fn handle_event(model: &Model, event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(model, key),
        Event::Mouse(mouse) => handle_mouse(model, mouse),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

fn handle_key(model: &Model, key: &KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // The help overlay swallows everything; any key dismisses it.
    if model.help_visible {
        return Some(Message::HideHelp);
    }

    if model.search_active {
        return handle_search_key(key);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Message::Quit),
        KeyCode::Char('q') => Some(Message::Quit),

        // Ctrl+/ flips the theme; a plain / focuses the search input, so
        // the modifier check has to come first.
        KeyCode::Char('/') if ctrl => Some(Message::ToggleTheme),
        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('k') if ctrl => Some(Message::StartSearch),
        KeyCode::Esc => Some(Message::ClearSearch),

        KeyCode::Left | KeyCode::Char('h') => Some(Message::SelectLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::SelectRight),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectDown),

        KeyCode::PageUp | KeyCode::Char('b') => Some(Message::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Message::GoToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Message::GoToBottom),

        KeyCode::Enter | KeyCode::Char('y' | 'c') => Some(Message::CopySelected),
        KeyCode::Char('f') => Some(Message::AddFavorite),
        KeyCode::Char('x') => Some(Message::RemoveFavorite),
        KeyCode::Char('e') => Some(Message::Export),
        KeyCode::Char('r') => Some(Message::Reload),
        KeyCode::Char('t') => Some(Message::ToggleGuide),
        KeyCode::Char('[') => Some(Message::GuideScrollUp(1)),
        KeyCode::Char(']') => Some(Message::GuideScrollDown(1)),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Keys while the search input has focus. Printable characters edit the
/// query live; everything else either leaves or clears the search.
fn handle_search_key(key: &KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Message::Quit),
        KeyCode::Esc => Some(Message::ClearSearch),
        KeyCode::Enter => Some(Message::CommitSearch),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char(c) if !ctrl => Some(Message::SearchInput(c)),
        _ => None,
    }
}

fn handle_mouse(model: &Model, mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Message::ScrollUp(1)),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown(1)),
        MouseEventKind::Down(MouseButton::Left) => {
            ui::card_hit(model, model.terminal_area(), mouse.column, mouse.row)
                .map(Message::CopyCard)
        }
        _ => None,
    }
}
