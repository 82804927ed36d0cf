//! # Path Resolution
//!
//! All notebook state lives under one root inside the host's user-data dir:
//!
//! ```text
//! <userData>/
//! └── notebook/
//!     ├── config.json    # Settings (optional)
//!     ├── notes/         # <timestamp>.md
//!     └── images/        # <timestamp>.png
//! ```
//!
//! Paths are recomputed on every call. Each directory is created with its
//! parents when missing, so resolving is idempotent and safe to repeat.

use crate::error::Result;
use crate::host::HostBridge;
use std::fs;
use std::path::{Path, PathBuf};

/// Used when the host cannot report a user-data directory.
pub const FALLBACK_USER_DATA: &str = "./userData";

pub const NOTEBOOK_DIR: &str = "notebook";
pub const NOTES_DIR: &str = "notes";
pub const IMAGES_DIR: &str = "images";

/// The three directories making up a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookPaths {
    pub root: PathBuf,
    pub notes: PathBuf,
    pub images: PathBuf,
}

impl NotebookPaths {
    /// Resolve (and create) every notebook directory for the given host.
    pub fn resolve<H: HostBridge + ?Sized>(host: &H) -> Result<Self> {
        let root = notebook_root_dir(host)?;
        let notes = ensure_dir(root.join(NOTES_DIR))?;
        let images = ensure_dir(root.join(IMAGES_DIR))?;
        Ok(Self {
            root,
            notes,
            images,
        })
    }
}

/// The host's user-data path, or [`FALLBACK_USER_DATA`] when absent or empty.
pub fn user_data_dir<H: HostBridge + ?Sized>(host: &H) -> PathBuf {
    host.user_data_path()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_USER_DATA))
}

/// `<userData>/notebook`
pub fn notebook_root_dir<H: HostBridge + ?Sized>(host: &H) -> Result<PathBuf> {
    ensure_dir(user_data_dir(host).join(NOTEBOOK_DIR))
}

/// `<userData>/notebook/images`
pub fn images_dir<H: HostBridge + ?Sized>(host: &H) -> Result<PathBuf> {
    ensure_dir(notebook_root_dir(host)?.join(IMAGES_DIR))
}

/// `<userData>/notebook/notes`
pub fn notes_dir<H: HostBridge + ?Sized>(host: &H) -> Result<PathBuf> {
    ensure_dir(notebook_root_dir(host)?.join(NOTES_DIR))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        create(&path)?;
    }
    Ok(path)
}

fn create(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path)?;
    Ok(())
}
