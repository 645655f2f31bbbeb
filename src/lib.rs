// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. catalog::Catalog)
    clippy::module_name_repetitions
)]

//! # Mojigrid
//!
//! A terminal catalog of the git emoji shortcodes used in a markdown file.
//!
//! Mojigrid scans a markdown source for `:shortcode:` occurrences, resolves
//! them against the GitHub emoji map and presents the result as a browsable
//! card grid with:
//! - A commit guide sidebar built from the markdown tables
//! - Click or keyboard copy of the shortcode literal
//! - Live substring filtering over both panes
//! - Persisted favorites, theme and a JSON export
//!
//! ## Architecture
//!
//! Mojigrid uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`shortcode`]: Shortcode extraction from markdown
//! - [`remote`]: Emoji map fetching
//! - [`catalog`]: Catalog assembly (cards, guide rows, stats)
//! - [`ui`]: Terminal UI components
//! - [`filter`]: Query matching
//! - [`storage`]: Persisted theme and favorites
//! - [`clipboard`]: Copy with OSC 52 fallback
//! - [`export`]: JSON export of stats and favorites

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod export;
pub mod filter;
pub mod remote;
pub mod shortcode;
pub mod storage;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::catalog::Catalog;
    pub use crate::ui::viewport::GridViewport;
}
