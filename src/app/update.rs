//! Pure state transitions.
//!
//! `update` consumes the model and a message and returns the next model.
//! Anything that touches the outside world (clipboard, storage, network,
//! files) happens afterwards in
//! [`effects`](crate::app::effects::handle_message_side_effects), against
//! the already-updated model.

use super::model::Model;

/// Every input the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ScrollUp(usize),
    ScrollDown(usize),
    GuideScrollUp(usize),
    GuideScrollDown(usize),
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    /// Copy the selected card's shortcode literal.
    CopySelected,
    /// Select and copy the card at a filtered index (mouse click).
    CopyCard(usize),
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave the search input, keeping the query applied.
    CommitSearch,
    /// Clear the query and show everything again.
    ClearSearch,
    ToggleTheme,
    ToggleGuide,
    ToggleHelp,
    HideHelp,
    AddFavorite,
    RemoveFavorite,
    Export,
    /// Re-fetch the emoji map and re-assemble the catalog.
    Reload,
    Resize(u16, u16),
    Quit,
}

/// Apply a message to the model. Pure: no IO, no side effects.
#[must_use]
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::ScrollUp(n) => model.grid.scroll_up(n),
        Message::ScrollDown(n) => model.grid.scroll_down(n),
        Message::GuideScrollUp(n) => model.guide_scroll_up(n),
        Message::GuideScrollDown(n) => model.guide_scroll_down(n),
        Message::PageUp => model.grid.page_up(),
        Message::PageDown => model.grid.page_down(),
        Message::GoToTop => {
            model.selected = 0;
            model.grid.go_to_top();
        }
        Message::GoToBottom => {
            model.selected = model.filtered_cards().len().saturating_sub(1);
            model.grid.go_to_bottom();
        }
        Message::SelectLeft => model.move_selection(-1, 0),
        Message::SelectRight => model.move_selection(1, 0),
        Message::SelectUp => model.move_selection(0, -1),
        Message::SelectDown => model.move_selection(0, 1),
        Message::CopyCard(idx) => {
            if idx < model.filtered_cards().len() {
                model.selected = idx;
                let row = model.selected / model.grid.columns();
                model.grid.ensure_row_visible(row);
            }
        }
        Message::StartSearch => {
            model.search_active = true;
            model.help_visible = false;
            model.relayout();
        }
        Message::SearchInput(c) => {
            if model.search_active {
                model.query.push(c);
                model.refresh_filter();
            }
        }
        Message::SearchBackspace => {
            if model.search_active {
                model.query.pop();
                model.refresh_filter();
            }
        }
        Message::CommitSearch => {
            model.search_active = false;
            model.relayout();
        }
        Message::ClearSearch => {
            model.query.clear();
            model.search_active = false;
            model.refresh_filter();
        }
        Message::ToggleTheme => model.theme = model.theme.flip(),
        Message::ToggleGuide => {
            model.guide_visible = !model.guide_visible;
            model.relayout();
        }
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => model.resize(width, height),
        Message::Quit => model.should_quit = true,
        // IO-only messages: state is untouched here, the effect layer acts
        // on them after the update.
        Message::CopySelected
        | Message::AddFavorite
        | Message::RemoveFavorite
        | Message::Export
        | Message::Reload => {}
    }
    model
}
