//! JSON export of the catalog stats and favorites.
//!
//! The on-disk shape matches the original export format of the page this
//! tool replaces: `exportDate` (RFC 3339 UTC), a `stats` object and the
//! `favorites` array.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::catalog::Stats;

/// Default export file name, written to the working directory.
pub const EXPORT_FILE_NAME: &str = "emojis-git.json";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub export_date: String,
    pub stats: Stats,
    pub favorites: Vec<String>,
}

/// Build a report stamped with the current UTC time.
pub fn build_report(stats: Stats, favorites: Vec<String>) -> ExportReport {
    let export_date = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string());
    ExportReport {
        export_date,
        stats,
        favorites,
    }
}

/// Write a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_report(path: &Path, report: &ExportReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("serialize export report")?;
    writer.flush().context("flush export file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_report_serializes_with_camel_case_keys() {
        let report = ExportReport {
            export_date: "2026-08-31T12:00:00Z".to_string(),
            stats: Stats::new(3, 5),
            favorites: vec![":smile:".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["exportDate"], "2026-08-31T12:00:00Z");
        assert_eq!(json["stats"]["commits"], 3);
        assert_eq!(json["stats"]["emojis"], 5);
        assert_eq!(json["stats"]["total"], 8);
        assert_eq!(json["favorites"][0], ":smile:");
    }

    #[test]
    fn test_build_report_stamps_rfc3339_utc() {
        let report = build_report(Stats::new(0, 0), Vec::new());
        assert!(report.export_date.ends_with('Z'));
        assert!(report.export_date.contains('T'));
    }

    #[test]
    fn test_write_report_produces_readable_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let report = build_report(Stats::new(1, 2), vec![":+1:".to_string()]);

        write_report(&path, &report).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["stats"]["total"], 3);
        assert_eq!(parsed["favorites"][0], ":+1:");
    }
}
