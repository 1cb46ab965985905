use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tempfile::NamedTempFile;

use super::domain::ResumeDocument;
use super::error::{AppError, Result};

/// Artifact file name for a given calendar date: `resume-data-<YYYY-MM-DD>.json`.
pub fn artifact_name(date: NaiveDate) -> String {
    format!("resume-data-{}.json", date.format("%Y-%m-%d"))
}

/// Write the document as a pretty-printed JSON artifact into `dir`.
///
/// The artifact is staged through a named temp file in the target directory
/// and renamed into place. The temp handle is released on every exit path:
/// an early error drops (and deletes) it, success renames it, so repeated
/// exports never accumulate stray files.
pub fn export_document(document: &ResumeDocument, dir: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(document)?;
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(json.as_bytes())?;

    let target = dir.join(artifact_name(Utc::now().date_naive()));
    staged
        .persist(&target)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(target)
}
