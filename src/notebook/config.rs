//! # Configuration
//!
//! Settings live in `config.json` at the notebook root. A missing file means
//! defaults; unknown keys in the file are ignored.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `note_ext` | `.md` | Extension for new note files |
//! | `image_ext` | `.png` | Extension for saved clipboard images |
//! | `image_markers` | `["/images/", "\images\", "notebook"]` | Substrings marking an image reference as local |

use crate::error::{NotebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTE_EXT: &str = ".md";
const DEFAULT_IMAGE_EXT: &str = ".png";

/// Keys accepted by [`NotebookConfig::get`] and [`NotebookConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["note-ext", "image-ext", "image-markers"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotebookConfig {
    #[serde(default = "default_note_ext")]
    pub note_ext: String,

    #[serde(default = "default_image_ext")]
    pub image_ext: String,

    /// A captured image path counting as local storage if it contains any of these.
    #[serde(default = "default_image_markers")]
    pub image_markers: Vec<String>,
}

fn default_note_ext() -> String {
    DEFAULT_NOTE_EXT.to_string()
}

fn default_image_ext() -> String {
    DEFAULT_IMAGE_EXT.to_string()
}

fn default_image_markers() -> Vec<String> {
    vec![
        "/images/".to_string(),
        "\\images\\".to_string(),
        "notebook".to_string(),
    ]
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            note_ext: default_note_ext(),
            image_ext: default_image_ext(),
            image_markers: default_image_markers(),
        }
    }
}

impl NotebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "note-ext" => Ok(self.note_ext.clone()),
            "image-ext" => Ok(self.image_ext.clone()),
            "image-markers" => Ok(self.image_markers.join(",")),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from its string form. Markers are comma separated.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "note-ext" => self.note_ext = normalize_ext(value)?,
            "image-ext" => self.image_ext = normalize_ext(value)?,
            "image-markers" => {
                self.image_markers = value
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from)
                    .collect();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn normalize_ext(ext: &str) -> Result<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return Err(NotebookError::Config("extension cannot be empty".to_string()));
    }
    if ext.starts_with('.') {
        Ok(ext.to_string())
    } else {
        Ok(format!(".{}", ext))
    }
}

fn unknown_key(key: &str) -> NotebookError {
    NotebookError::Config(format!(
        "unknown key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
