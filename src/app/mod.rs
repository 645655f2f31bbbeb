//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, TOAST_DURATION, Toast, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::remote::GITHUB_EMOJI_ENDPOINT;
use crate::ui::style::Theme;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    endpoint: String,
    theme_override: Option<Theme>,
    guide_visible: bool,
    storage_dir: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given markdown file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            endpoint: GITHUB_EMOJI_ENDPOINT.to_string(),
            theme_override: None,
            guide_visible: true,
            storage_dir: None,
        }
    }

    /// Fetch the emoji map from a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Start with an explicit theme instead of the persisted one.
    pub const fn with_theme(mut self, theme: Option<Theme>) -> Self {
        self.theme_override = theme;
        self
    }

    /// Set initial guide pane visibility.
    pub const fn with_guide(mut self, visible: bool) -> Self {
        self.guide_visible = visible;
        self
    }

    /// Use an explicit state directory instead of the per-OS default.
    pub fn with_storage_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.storage_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests;
