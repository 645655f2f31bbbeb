use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use crate::catalog::Catalog;
use crate::remote::{EmojiMap, GITHUB_EMOJI_ENDPOINT};
use crate::storage::Storage;
use crate::ui::style::Theme;

use super::effects::handle_message_side_effects;
use super::event_loop::ResizeDebouncer;
use super::input::handle_event;
use super::{Message, Model, ToastLevel, update};

const SOURCE: &str = "\
# Git Emojis

| Type | Emoji | Description |
|------|-------|-------------|
| feat | :sparkles: | New feature |
| fix  | :bug:      | Bug fix     |

Also :smile: and :+1: in prose.
";

fn test_map() -> EmojiMap {
    ["sparkles", "bug", "smile", "+1"]
        .iter()
        .map(|code| ((*code).to_string(), format!("https://img.example/{code}.png")))
        .collect()
}

fn model_at(dir: &Path) -> Model {
    Model::new(
        PathBuf::from("emojis.md"),
        SOURCE.to_string(),
        Catalog::assemble(SOURCE, &test_map()),
        Theme::Dark,
        Storage::open_at(dir),
        GITHUB_EMOJI_ENDPOINT.to_string(),
        80,
        24,
    )
}

fn test_model() -> Model {
    model_at(Path::new(".mojigrid-test"))
}

/// A model with enough cards that the grid has to scroll at 80x24.
fn long_model() -> Model {
    let mut source = String::new();
    let mut map = EmojiMap::new();
    for i in 0..30 {
        source.push_str(&format!(":code{i}: "));
        map.insert(format!("code{i}"), format!("https://img.example/{i}.png"));
    }
    Model::new(
        PathBuf::from("emojis.md"),
        source.clone(),
        Catalog::assemble(&source, &map),
        Theme::Dark,
        Storage::open_at(".mojigrid-test"),
        GITHUB_EMOJI_ENDPOINT.to_string(),
        80,
        24,
    )
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn test_scroll_down_updates_grid() {
    let model = long_model();
    assert!(model.grid.total_rows() > model.grid.visible_rows());

    let model = update(model, Message::ScrollDown(5));
    assert_eq!(model.grid.offset(), 5);
}

#[test]
fn test_guide_scroll_clamps_at_both_ends() {
    let mut source = String::from("| Type | Emoji |\n|------|-------|\n");
    for i in 0..40 {
        source.push_str(&format!("| kind{i:02} | :smile: |\n"));
    }
    let mut model = Model::new(
        PathBuf::from("emojis.md"),
        source.clone(),
        Catalog::assemble(&source, &test_map()),
        Theme::Dark,
        Storage::open_at(".mojigrid-test"),
        GITHUB_EMOJI_ENDPOINT.to_string(),
        80,
        24,
    );
    assert!(model.guide_visible_rows() > 0);

    model = update(model, Message::GuideScrollDown(100));
    assert_eq!(
        model.guide_offset() + model.guide_visible_rows(),
        model.filtered_guide().len()
    );

    model = update(model, Message::GuideScrollUp(100));
    assert_eq!(model.guide_offset(), 0);
}

#[test]
fn test_select_right_moves_selection() {
    let model = test_model();
    let model = update(model, Message::SelectRight);
    assert_eq!(model.selected, 1);
}

#[test]
fn test_selection_clamps_at_last_card() {
    let mut model = test_model();
    for _ in 0..20 {
        model = update(model, Message::SelectRight);
    }
    assert_eq!(model.selected, model.filtered_cards().len() - 1);
}

#[test]
fn test_go_to_bottom_selects_last_card() {
    let model = update(long_model(), Message::GoToBottom);
    assert_eq!(model.selected, model.filtered_cards().len() - 1);
    assert!(!model.grid.can_scroll_down());
}

#[test]
fn test_copy_card_selects_clicked_card() {
    let model = update(test_model(), Message::CopyCard(2));
    assert_eq!(model.selected, 2);
}

#[test]
fn test_search_input_filters_both_panes() {
    let mut model = update(test_model(), Message::StartSearch);
    for c in "bug".chars() {
        model = update(model, Message::SearchInput(c));
    }
    assert_eq!(model.filtered_cards().len(), 1);
    assert_eq!(model.visible_card(0).unwrap().shortcode, "bug");
    assert_eq!(model.filtered_guide().len(), 1);
}

#[test]
fn test_unmatched_query_sets_no_results() {
    let mut model = update(test_model(), Message::StartSearch);
    for c in "zzz".chars() {
        model = update(model, Message::SearchInput(c));
    }
    assert!(model.no_results());
}

#[test]
fn test_clear_search_restores_everything() {
    let mut model = update(test_model(), Message::StartSearch);
    model = update(model, Message::SearchInput('z'));
    model = update(model, Message::ClearSearch);

    assert!(!model.no_results());
    assert!(!model.search_active);
    assert_eq!(model.filtered_cards().len(), 4);
    assert_eq!(model.filtered_guide().len(), 2);
}

#[test]
fn test_commit_search_keeps_query_applied() {
    let mut model = update(test_model(), Message::StartSearch);
    model = update(model, Message::SearchInput('b'));
    model = update(model, Message::CommitSearch);

    assert!(!model.search_active);
    assert_eq!(model.query, "b");
    assert_eq!(model.filtered_cards().len(), 1);
}

#[test]
fn test_toggle_theme_flips_and_persists() {
    let dir = tempdir().unwrap();
    let mut model = model_at(dir.path());
    assert_eq!(model.theme, Theme::Dark);

    model = update(model, Message::ToggleTheme);
    handle_message_side_effects(&mut model, &Message::ToggleTheme);
    assert_eq!(model.theme, Theme::Light);

    // A fresh handle on the same directory sees the persisted choice.
    assert_eq!(Storage::open_at(dir.path()).theme(), Theme::Light);
}

#[test]
fn test_toggle_guide_changes_visibility() {
    let model = test_model();
    assert!(model.guide_visible);
    let model = update(model, Message::ToggleGuide);
    assert!(!model.guide_visible);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_add_favorite_warns_on_duplicate() {
    let dir = tempdir().unwrap();
    let mut model = model_at(dir.path());

    handle_message_side_effects(&mut model, &Message::AddFavorite);
    assert_eq!(model.active_toast().unwrap().level, ToastLevel::Info);

    handle_message_side_effects(&mut model, &Message::AddFavorite);
    assert_eq!(model.active_toast().unwrap().level, ToastLevel::Warning);

    assert_eq!(model.storage.favorites().len(), 1);
}

#[test]
fn test_remove_favorite_updates_storage() {
    let dir = tempdir().unwrap();
    let mut model = model_at(dir.path());

    handle_message_side_effects(&mut model, &Message::AddFavorite);
    handle_message_side_effects(&mut model, &Message::RemoveFavorite);
    assert!(model.storage.favorites().is_empty());
}

#[test]
fn test_export_writes_report_file() {
    let dir = tempdir().unwrap();
    let mut model = model_at(dir.path());
    model.export_path = dir.path().join("out.json");
    handle_message_side_effects(&mut model, &Message::AddFavorite);

    handle_message_side_effects(&mut model, &Message::Export);
    assert_eq!(model.active_toast().unwrap().level, ToastLevel::Info);

    let raw = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["stats"]["emojis"], 4);
    assert_eq!(parsed["stats"]["commits"], 2);
    assert_eq!(parsed["favorites"].as_array().unwrap().len(), 1);
    assert!(parsed["exportDate"].is_string());
}

#[test]
fn test_toast_replaces_previous_and_does_not_expire_early() {
    let mut model = test_model();
    model.show_toast("first", ToastLevel::Info);
    model.show_toast("second", ToastLevel::Warning);

    assert_eq!(model.active_toast().unwrap().message, "second");
    assert!(!model.expire_toast());
    assert!(model.active_toast().is_some());
}

#[test]
fn test_resize_debouncer_coalesces_and_delays() {
    let mut debouncer = ResizeDebouncer::new(100);
    debouncer.queue(100, 50, 0);
    debouncer.queue(120, 40, 50);

    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_ready(60), None);
    assert_eq!(debouncer.take_ready(150), Some((120, 40)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_ctrl_slash_toggles_theme_plain_slash_searches() {
    let model = test_model();
    assert_eq!(
        handle_event(&model, &ctrl_key('/')),
        Some(Message::ToggleTheme)
    );
    assert_eq!(
        handle_event(&model, &key(KeyCode::Char('/'))),
        Some(Message::StartSearch)
    );
}

#[test]
fn test_ctrl_k_focuses_search_and_esc_clears() {
    let model = test_model();
    assert_eq!(handle_event(&model, &ctrl_key('k')), Some(Message::StartSearch));
    assert_eq!(
        handle_event(&model, &key(KeyCode::Esc)),
        Some(Message::ClearSearch)
    );
}

#[test]
fn test_search_mode_captures_printable_keys() {
    let mut model = test_model();
    model.search_active = true;

    assert_eq!(
        handle_event(&model, &key(KeyCode::Char('q'))),
        Some(Message::SearchInput('q'))
    );
    assert_eq!(
        handle_event(&model, &key(KeyCode::Enter)),
        Some(Message::CommitSearch)
    );
    assert_eq!(handle_event(&model, &ctrl_key('c')), Some(Message::Quit));
}

#[test]
fn test_any_key_dismisses_help() {
    let mut model = test_model();
    model.help_visible = true;
    assert_eq!(
        handle_event(&model, &key(KeyCode::Char('j'))),
        Some(Message::HideHelp)
    );
}
