//! Persistent key-value storage for theme and favorites.
//!
//! A flat store: one file per key under the per-OS state directory. Reads
//! never fail outward — malformed or missing data degrades to the default
//! value with a warning, because losing a preference must never take the
//! application down. Every favorites mutation is a read-modify-write
//! against disk so concurrent readers of the same key (a second run of the
//! tool) always see the latest list.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::style::Theme;

pub const THEME_KEY: &str = "theme";
pub const FAVORITES_KEY: &str = "favorites";

/// Outcome of [`Storage::add_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Flat string key-value store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open the store at the per-OS default state directory.
    pub fn open_default() -> Self {
        Self { dir: default_state_dir() }
    }

    /// Open the store at an explicit directory (tests, overrides).
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The persisted theme, defaulting to dark when absent or malformed.
    pub fn theme(&self) -> Theme {
        let Some(raw) = self.read_key(THEME_KEY) else {
            return Theme::default();
        };
        Theme::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw.trim(), "malformed theme in storage, using default");
            Theme::default()
        })
    }

    /// Persist the theme.
    ///
    /// # Errors
    ///
    /// Returns an error when the state directory or file cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.write_key(THEME_KEY, theme.as_str())
    }

    /// The persisted favorites list, in insertion order.
    ///
    /// Malformed data yields an empty list rather than an error.
    pub fn favorites(&self) -> Vec<String> {
        let Some(raw) = self.read_key(FAVORITES_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "malformed favorites in storage, starting empty");
            Vec::new()
        })
    }

    /// Add an item to favorites. Duplicates are rejected before insertion,
    /// so adding twice leaves a single entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated list cannot be written back.
    pub fn add_favorite(&self, item: &str) -> Result<AddOutcome> {
        let mut favorites = self.favorites();
        if favorites.iter().any(|existing| existing == item) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        favorites.push(item.to_string());
        self.write_favorites(&favorites)?;
        Ok(AddOutcome::Added)
    }

    /// Remove an item from favorites. Removing an absent item is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the updated list cannot be written back.
    pub fn remove_favorite(&self, item: &str) -> Result<()> {
        let mut favorites = self.favorites();
        favorites.retain(|existing| existing != item);
        self.write_favorites(&favorites)
    }

    fn write_favorites(&self, favorites: &[String]) -> Result<()> {
        let json = serde_json::to_string(favorites).context("serialize favorites")?;
        self.write_key(FAVORITES_KEY, &json)
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create state dir {}", self.dir.display()))?;
        let path = self.dir.join(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn default_state_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mojigrid");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mojigrid");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("mojigrid");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("mojigrid");
        }
    }

    PathBuf::from(".mojigrid")
}
