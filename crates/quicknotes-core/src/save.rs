//! Saving a note to disk
//!
//! Destination choice and the write itself are collaborator seams, so the
//! workspace logic stays free of UI and filesystem specifics and both can
//! be faked in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Chooses where a note should be written, or cancels.
pub trait DestinationPicker {
    /// `None` means the user dismissed the prompt.
    fn pick_destination(&self) -> Option<PathBuf>;
}

/// Writes note text to a destination.
pub trait NoteWriter {
    fn write_note(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Production writer: UTF-8 text, overwrites any existing file.
pub struct DiskWriter;

impl NoteWriter for DiskWriter {
    fn write_note(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Picker for a destination that has already been chosen, e.g. typed into
/// the save prompt.
pub struct FixedDestination(pub PathBuf);

impl DestinationPicker for FixedDestination {
    fn pick_destination(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Outcome of a save that got past content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The note was written to this path
    Saved(PathBuf),
    /// The destination prompt was dismissed; nothing was written
    Cancelled,
}

/// Normalize user-entered destination text: relative paths resolve against
/// `save_dir`, and a file name without an extension gets `.txt`. Empty
/// input counts as cancellation.
pub fn resolve_destination(input: &str, save_dir: &Path) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(trimmed);
    if path.is_relative() {
        path = save_dir.join(path);
    }
    if path.extension().is_none() {
        path.set_extension("txt");
    }

    Some(path)
}
