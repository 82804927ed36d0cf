//! # Data Model
//!
//! A [`Note`] is a record pointing at a Markdown file; its content lives only
//! in that file. [`Folder`]s form a tree of arbitrary depth holding notes.
//!
//! Records and files are not reconciled here. A record whose file is gone is
//! "dangling" and [`Folder::dangling_notes`] finds those; what to do about
//! them is up to the caller.
//!
//! Both types serialize in camelCase to match the front end's JSON.

use chrono::{DateTime, Utc};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub file_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            file_path: file_path.into(),
            folder_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn in_folder(mut self, folder_id: Uuid) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Bump `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// A note is valid when its file exists inside `notes_dir`.
    pub fn is_valid(&self, notes_dir: &Path) -> bool {
        self.file_path.starts_with(notes_dir) && self.file_path.is_file()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subfolders: Vec<Folder>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expanded: false,
            notes: Vec::new(),
            subfolders: Vec::new(),
        }
    }

    /// Append a note, stamping it with this folder's id.
    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note.in_folder(self.id));
    }

    pub fn add_subfolder(&mut self, folder: Folder) {
        self.subfolders.push(folder);
    }

    pub fn find_note(&self, id: &Uuid) -> Option<&Note> {
        self.walk_notes().into_iter().find(|n| &n.id == id)
    }

    pub fn find_note_mut(&mut self, id: &Uuid) -> Option<&mut Note> {
        if let Some(pos) = self.notes.iter().position(|n| &n.id == id) {
            return self.notes.get_mut(pos);
        }
        self.subfolders
            .iter_mut()
            .find_map(|folder| folder.find_note_mut(id))
    }

    pub fn find_folder(&self, id: &Uuid) -> Option<&Folder> {
        if &self.id == id {
            return Some(self);
        }
        self.subfolders.iter().find_map(|f| f.find_folder(id))
    }

    /// Remove a note anywhere in the tree, returning it.
    pub fn remove_note(&mut self, id: &Uuid) -> Option<Note> {
        if let Some(pos) = self.notes.iter().position(|n| &n.id == id) {
            return Some(self.notes.remove(pos));
        }
        self.subfolders
            .iter_mut()
            .find_map(|folder| folder.remove_note(id))
    }

    /// Every note in the tree, depth first, own notes before subfolders'.
    pub fn walk_notes(&self) -> Vec<&Note> {
        let mut out: Vec<&Note> = self.notes.iter().collect();
        for folder in &self.subfolders {
            out.extend(folder.walk_notes());
        }
        out
    }

    pub fn note_count(&self) -> usize {
        self.notes.len() + self.subfolders.iter().map(Folder::note_count).sum::<usize>()
    }

    /// Notes in the tree whose file is missing or outside `notes_dir`.
    pub fn dangling_notes(&self, notes_dir: &Path) -> Vec<&Note> {
        self.walk_notes()
            .into_iter()
            .filter(|n| !n.is_valid(notes_dir))
            .collect()
    }
}

/// A display title for Markdown `content`.
///
/// The first top-level heading wins, then any heading, then the first
/// non-empty line. Empty content is "Untitled".
pub fn derive_title(content: &str) -> String {
    let mut best: Option<(HeadingLevel, String)> = None;
    let mut current: Option<(HeadingLevel, String)> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => current = Some((level, String::new())),
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_string();
                    let better = match &best {
                        None => true,
                        Some((best_level, _)) => level < *best_level,
                    };
                    if !text.is_empty() && better {
                        best = Some((level, text));
                    }
                }
            }
            _ => {}
        }
    }

    if let Some((_, title)) = best {
        return title;
    }

    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
        .unwrap_or_else(|| UNTITLED.to_string())
}
