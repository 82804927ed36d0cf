use chrono::{DateTime, Utc};
use colored::Colorize;
use notebook::error::Result;
use notebook::paths::NotebookPaths;
use notebook::store::notes::StoredNote;
use serde::Serialize;
use std::path::Path;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const INDEX_WIDTH: usize = 5;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_path(path: &Path) {
    println!("{}", path.display());
}

pub(super) fn print_paths(paths: &NotebookPaths) {
    for (label, path) in [
        ("root", &paths.root),
        ("notes", &paths.notes),
        ("images", &paths.images),
    ] {
        println!("{} {}", format!("{:<7}", label).bold(), path.display());
    }
}

pub(super) fn print_notes(notes: &[StoredNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }
    for (i, note) in notes.iter().enumerate() {
        println!("{}", format_note_line(i + 1, note, Utc::now()));
    }
}

fn format_note_line(index: usize, note: &StoredNote, now: DateTime<Utc>) -> String {
    let idx = format!("{}.", index);
    let time_ago = format_time_ago(note.modified_at, now);
    let title_width = LINE_WIDTH - INDEX_WIDTH - TIME_WIDTH - 2;
    let title = truncate_to_width(&note.title, title_width);
    let padding = " ".repeat(title_width.saturating_sub(title.width()));

    format!(
        "{} {}{} {}",
        format!("{:>w$}", idx, w = INDEX_WIDTH).yellow(),
        title,
        padding,
        format!("{:>t$}", time_ago, t = TIME_WIDTH).dimmed()
    )
}

fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

/// Cut `text` to at most `max` display columns, ending in an ellipsis if cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
