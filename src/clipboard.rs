//! Clipboard copy with a terminal fallback.
//!
//! The primary path uses the system clipboard via `arboard`. When that is
//! unavailable (headless session, missing display server) the text is sent
//! as an OSC 52 escape sequence instead, which most modern terminals
//! translate into a clipboard write on the user's side of the connection.
//! Only when both paths fail does the caller see an error, and even then
//! the failure is reported, not fatal.

use std::io::{Write, stdout};

use base64::Engine;
use thiserror::Error;

/// Which copy path succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// System clipboard via `arboard`.
    System,
    /// OSC 52 escape sequence written to the terminal.
    Osc52,
}

/// Both copy paths failed.
#[derive(Debug, Error)]
#[error("clipboard copy failed (system: {system}; osc52: {osc52})")]
pub struct ClipboardError {
    system: String,
    osc52: String,
}

/// Copy `text` to the clipboard, falling back to OSC 52.
///
/// # Errors
///
/// Returns [`ClipboardError`] only when both the system clipboard and the
/// OSC 52 write fail.
pub fn copy(text: &str) -> Result<CopyMethod, ClipboardError> {
    let system_err = match copy_system(text) {
        Ok(()) => return Ok(CopyMethod::System),
        Err(err) => err,
    };
    tracing::debug!(%system_err, "system clipboard unavailable, trying OSC 52");

    match copy_osc52(text) {
        Ok(()) => Ok(CopyMethod::Osc52),
        Err(osc_err) => Err(ClipboardError {
            system: system_err.to_string(),
            osc52: osc_err.to_string(),
        }),
    }
}

fn copy_system(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text.to_string())
}

fn copy_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
