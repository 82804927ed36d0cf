use super::{remove_if_exists, timestamp_file_name};
use crate::error::{NotebookError, Result};
use crate::model::derive_title;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A note file found by listing the notes directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub path: PathBuf,
    pub title: String,
    pub modified_at: DateTime<Utc>,
}

/// Write `content` to a new timestamp-named file in `notes_dir`.
pub fn create_note(notes_dir: &Path, content: &str, ext: &str) -> Result<PathBuf> {
    let path = notes_dir.join(timestamp_file_name(Local::now(), ext));
    fs::write(&path, content).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to save note file");
        NotebookError::Io(e)
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "saved note");
    Ok(path)
}

/// Overwrite the note at `path`, creating it if missing.
pub fn update_note(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to update note file");
        NotebookError::Io(e)
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "updated note");
    Ok(())
}

/// Read a note. Missing files and read failures both yield an empty string.
pub fn load_note(path: &Path) -> String {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "note file does not exist");
        return String::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read note file");
            String::new()
        }
    }
}

/// Delete a note file. `false` means there was nothing to delete.
pub fn delete_note(path: &Path) -> bool {
    remove_if_exists(path, "note file")
}

/// Read an arbitrary text file, e.g. one dropped in from outside the notebook.
///
/// Unlike [`load_note`], a missing file is an error.
pub fn read_local_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "file does not exist");
        return Err(NotebookError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read file");
        NotebookError::Io(e)
    })
}

/// Every file in `notes_dir` with extension `ext`, newest first.
pub fn list_notes(notes_dir: &Path, ext: &str) -> Result<Vec<StoredNote>> {
    if !notes_dir.exists() {
        return Ok(Vec::new());
    }

    let wanted = ext.trim_start_matches('.');
    let mut notes = Vec::new();
    for entry in fs::read_dir(notes_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(wanted) {
            continue;
        }
        let modified_at: DateTime<Utc> = fs::metadata(&path)?.modified()?.into();
        let title = derive_title(&load_note(&path));
        notes.push(StoredNote {
            path,
            title,
            modified_at,
        });
    }

    notes.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| b.path.cmp(&a.path))
    });
    Ok(notes)
}
