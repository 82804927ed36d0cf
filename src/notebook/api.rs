//! # API Facade
//!
//! [`NotebookApi`] is the bridge: the fixed table of capabilities handed to a
//! UI layer at startup. Every UI (the CLI here, a desktop front end elsewhere)
//! goes through it and nothing else.
//!
//! The facade:
//! - **Resolves paths** through the host on every call, so a changed user-data
//!   directory is picked up without restarting
//! - **Applies configuration** (extensions, local-image markers)
//! - **Dispatches** to [`crate::store`] and [`crate::utility`]
//!
//! It does no terminal I/O and never exits the process.
//!
//! ## Generic Over HostBridge
//!
//! `NotebookApi<H: HostBridge>`:
//! - CLI: `NotebookApi<StandaloneHost>`
//! - Embedding: any host implementing the two bridge calls
//! - Tests: a host pinned to a temp dir

use crate::actions::Actions;
use crate::config::NotebookConfig;
use crate::error::Result;
use crate::host::HostBridge;
use crate::model::{derive_title, Note};
use crate::paths::{self, NotebookPaths};
use crate::store::notes::StoredNote;
use crate::store::{images, notes};
use crate::utility;
use serde_json::Value;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct NotebookApi<H: HostBridge> {
    host: H,
    actions: Actions,
}

impl<H: HostBridge> NotebookApi<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            actions: Actions::default(),
        }
    }

    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = actions;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // --- Utilities ---

    pub fn get_current_time(&self) -> String {
        utility::get_current_time()
    }

    pub fn format_text(&self, text: &str) -> String {
        utility::format_text(text)
    }

    pub fn fetch_data(&self, url: &str) -> Result<Value> {
        utility::fetch_data(url)
    }

    // --- Directories ---

    pub fn get_notebook_root_dir(&self) -> Result<PathBuf> {
        paths::notebook_root_dir(&self.host)
    }

    pub fn get_clipboard_images_dir(&self) -> Result<PathBuf> {
        paths::images_dir(&self.host)
    }

    pub fn get_notes_storage_dir(&self) -> Result<PathBuf> {
        paths::notes_dir(&self.host)
    }

    pub fn paths(&self) -> Result<NotebookPaths> {
        NotebookPaths::resolve(&self.host)
    }

    // --- Configuration ---

    pub fn config(&self) -> Result<NotebookConfig> {
        NotebookConfig::load(self.get_notebook_root_dir()?)
    }

    /// Set one key and persist. Returns the updated config.
    pub fn set_config(&self, key: &str, value: &str) -> Result<NotebookConfig> {
        let root = self.get_notebook_root_dir()?;
        let mut config = NotebookConfig::load(&root)?;
        config.set(key, value)?;
        config.save(&root)?;
        Ok(config)
    }

    // --- Images ---

    pub fn save_image_from_base64(&self, data: &str) -> Result<PathBuf> {
        let dir = self.get_clipboard_images_dir()?;
        let config = self.config()?;
        images::save_image(&dir, data, &config.image_ext)
    }

    pub fn extract_image_paths(&self, content: &str) -> Result<Vec<String>> {
        let dir = self.get_clipboard_images_dir().inspect_err(|e| {
            tracing::error!(error = %e, "failed to extract image paths");
        })?;
        let config = self.config()?;
        Ok(images::extract_image_paths(
            content,
            &dir,
            &config.image_markers,
        ))
    }

    pub fn delete_image(&self, path: &Path) -> bool {
        images::delete_image(path)
    }

    pub fn has_images(&self, content: &str) -> Result<bool> {
        Ok(!self.extract_image_paths(content)?.is_empty())
    }

    // --- Notes ---

    /// Save `content` as a new note file. `note_id` only tags the log entry;
    /// the file name comes from the clock.
    pub fn save_note_to_file(&self, note_id: &Uuid, content: &str) -> Result<PathBuf> {
        let dir = self.get_notes_storage_dir().inspect_err(|e| {
            tracing::error!(note_id = %note_id, error = %e, "failed to save note file");
        })?;
        let config = self.config()?;
        let path = notes::create_note(&dir, content, &config.note_ext)?;
        tracing::info!(note_id = %note_id, path = %path.display(), "note saved");
        Ok(path)
    }

    /// Save `content` and return a fresh [`Note`] record for it.
    pub fn create_note(&self, content: &str) -> Result<Note> {
        let mut note = Note::new(derive_title(content), PathBuf::new());
        note.file_path = self.save_note_to_file(&note.id, content)?;
        Ok(note)
    }

    pub fn update_note_file(&self, path: &Path, content: &str) -> Result<()> {
        notes::update_note(path, content)
    }

    pub fn load_note_from_file(&self, path: &Path) -> String {
        notes::load_note(path)
    }

    pub fn delete_note_file(&self, path: &Path) -> bool {
        notes::delete_note(path)
    }

    pub fn read_local_text_file(&self, path: &Path) -> Result<String> {
        notes::read_local_text_file(path)
    }

    pub fn list_notes(&self) -> Result<Vec<StoredNote>> {
        let dir = self.get_notes_storage_dir()?;
        let config = self.config()?;
        notes::list_notes(&dir, &config.note_ext)
    }

    // --- Actions ---

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.names().collect()
    }

    pub fn on_enter(&self, action: &str, params: &Value) -> Result<()> {
        self.actions.dispatch(action, &self.host, params)
    }
}
