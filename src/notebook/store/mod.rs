//! # Storage Layer
//!
//! Stateless functions over the notebook directories. Nothing here keeps an
//! index: each note is a standalone Markdown file, each image a standalone
//! binary file, and the directory listing is the only enumeration.
//!
//! ## File Naming
//!
//! New files are named from the local wall clock at millisecond resolution,
//! e.g. `2024-03-09-14-05-07-042.md`. Two writes in the same millisecond land
//! on the same name and the later one wins.
//!
//! ## Failure Policies
//!
//! Operations differ in how they report failure, and callers rely on that:
//! - **Swallow-and-default**: [`notes::load_note`] yields `""`, deletes yield `false`.
//! - **Log-and-propagate**: saves, updates and extraction log then return `Err`.
//! - **Error-on-missing**: [`notes::read_local_text_file`] fails for missing files.
//!
//! Writes are plain `fs::write`; there is no rename-on-write.
//!
//! ## Modules
//!
//! - [`notes`]: note files
//! - [`images`]: base64 image decoding and Markdown image references

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

pub mod images;
pub mod notes;

/// `YYYY-MM-DD-HH-mm-ss-SSS` followed by `ext` (which includes its dot).
pub fn timestamp_file_name(now: DateTime<Local>, ext: &str) -> String {
    format!("{}{}", now.format("%Y-%m-%d-%H-%M-%S-%3f"), ext)
}

/// Remove `path` if it exists. Returns whether a file was removed.
///
/// Failures are logged under `what` and reported as `false`.
pub(crate) fn remove_if_exists(path: &Path, what: &str) -> bool {
    if !path.exists() {
        return false;
    }
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "deleted {}", what);
            true
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to delete {}", what);
            false
        }
    }
}
