//! Side effects triggered by messages.
//!
//! Runs after the pure update, against the already-updated model. Every
//! failure here is reported through a toast or the log, never propagated:
//! a copy or export going wrong must not take the application down.

use crate::catalog::{Catalog, EmojiCard};
use crate::clipboard;
use crate::export;
use crate::remote::EmojiMapClient;
use crate::storage::AddOutcome;

use super::model::{Model, ToastLevel};
use super::update::Message;

/// Perform the IO a message calls for.
pub fn handle_message_side_effects(model: &mut Model, msg: &Message) {
    match msg {
        Message::CopySelected | Message::CopyCard(_) => copy_selected(model),
        Message::ToggleTheme => persist_theme(model),
        Message::AddFavorite => add_favorite(model),
        Message::RemoveFavorite => remove_favorite(model),
        Message::Export => export_catalog(model),
        Message::Reload => reload_catalog(model),
        _ => {}
    }
}

fn copy_selected(model: &mut Model) {
    let Some(text) = model.selected_card().map(EmojiCard::copy_text) else {
        return;
    };
    match clipboard::copy(&text) {
        Ok(method) => {
            tracing::debug!(%text, ?method, "copied shortcode");
            model.show_toast(format!("Copied {text}"), ToastLevel::Info);
        }
        Err(err) => {
            tracing::error!(%err, "clipboard copy failed");
            model.show_toast("Copy failed", ToastLevel::Error);
        }
    }
}

fn persist_theme(model: &mut Model) {
    if let Err(err) = model.storage.set_theme(model.theme) {
        tracing::warn!(%err, "failed to persist theme");
    }
}

fn add_favorite(model: &mut Model) {
    let Some(text) = model.selected_card().map(EmojiCard::copy_text) else {
        return;
    };
    match model.storage.add_favorite(&text) {
        Ok(AddOutcome::Added) => {
            model.show_toast(format!("Added {text} to favorites"), ToastLevel::Info);
        }
        Ok(AddOutcome::AlreadyPresent) => {
            model.show_toast(format!("{text} is already in favorites"), ToastLevel::Warning);
        }
        Err(err) => {
            tracing::error!(%err, "failed to save favorite");
            model.show_toast("Could not save favorite", ToastLevel::Error);
        }
    }
}

fn remove_favorite(model: &mut Model) {
    let Some(text) = model.selected_card().map(EmojiCard::copy_text) else {
        return;
    };
    match model.storage.remove_favorite(&text) {
        Ok(()) => {
            model.show_toast(format!("Removed {text} from favorites"), ToastLevel::Info);
        }
        Err(err) => {
            tracing::error!(%err, "failed to remove favorite");
            model.show_toast("Could not update favorites", ToastLevel::Error);
        }
    }
}

fn export_catalog(model: &mut Model) {
    let report = export::build_report(model.stats(), model.storage.favorites());
    match export::write_report(&model.export_path, &report) {
        Ok(()) => {
            model.show_toast(
                format!("Exported to {}", model.export_path.display()),
                ToastLevel::Info,
            );
        }
        Err(err) => {
            tracing::error!(%err, "export failed");
            model.show_toast("Export failed", ToastLevel::Error);
        }
    }
}

/// Re-fetch the emoji map and rebuild the catalog from the same source.
/// On failure the current catalog stays in place.
fn reload_catalog(model: &mut Model) {
    match EmojiMapClient::new(model.endpoint.clone()).load() {
        Ok(map) => {
            model.set_catalog(Catalog::assemble(&model.source, &map));
            model.show_toast(
                format!("Reloaded {} emojis", model.catalog.cards().len()),
                ToastLevel::Info,
            );
        }
        Err(err) => {
            tracing::error!(%err, "emoji map reload failed");
            model.show_toast(format!("Reload failed: {err}"), ToastLevel::Error);
        }
    }
}
