//! Note session data structure

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "New Note";

#[derive(Debug, Clone)]
pub struct NoteSession {
    /// Unique identifier, stable for the lifetime of the process
    pub id: String,
    /// Tab title shown to the user
    pub title: String,
    /// In-memory text buffer
    pub content: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl NoteSession {
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the title. Callers validate; an empty title is never stored.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Replace the text buffer (editor keystrokes land here).
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Content as it would be written to disk.
    pub fn trimmed_content(&self) -> &str {
        self.content.trim()
    }
}

impl Default for NoteSession {
    fn default() -> Self {
        Self::new()
    }
}
