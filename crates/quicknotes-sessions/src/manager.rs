//! Session Manager
//!
//! Owns the ordered list of open notes and the current selection. Every
//! user action in the workspace goes through here, one action at a time.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::SessionError;
use crate::note::NoteSession;
use crate::phase::WorkspacePhase;
use crate::Result;

#[derive(Default)]
struct Inner {
    /// Insertion order is tab order
    sessions: Vec<NoteSession>,
    /// Id of the selected note; must reference an entry in `sessions`
    selected_id: Option<String>,
}

impl Inner {
    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.sessions.iter().position(|s| s.id == id)
    }
}

pub struct SessionManager {
    inner: Arc<RwLock<Inner>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Create a new note and select it
    pub fn create_session(&self) -> NoteSession {
        let note = NoteSession::new();

        let mut inner = self.inner.write();
        inner.selected_id = Some(note.id.clone());
        inner.sessions.push(note.clone());

        tracing::info!(note_id = %note.id, "Created note");

        note
    }

    /// All open notes in tab order
    pub fn sessions(&self) -> Vec<NoteSession> {
        self.inner.read().sessions.clone()
    }

    /// The selected note, if any
    pub fn selected(&self) -> Option<NoteSession> {
        let inner = self.inner.read();
        inner.selected_index().map(|i| inner.sessions[i].clone())
    }

    pub fn selected_id(&self) -> Option<String> {
        self.inner.read().selected_id.clone()
    }

    /// Index of the selected note in tab order
    pub fn selected_index(&self) -> Option<usize> {
        self.inner.read().selected_index()
    }

    /// Select a note by id (tab click / tab switch)
    pub fn select(&self, note_id: &str) -> Result<NoteSession> {
        let mut inner = self.inner.write();
        let note = inner
            .sessions
            .iter()
            .find(|s| s.id == note_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(note_id.to_string()))?;

        inner.selected_id = Some(note.id.clone());

        tracing::debug!(note_id = %note.id, "Selected note");

        Ok(note)
    }

    /// Delete the selected note. The prior neighbor becomes selected, or
    /// the new first tab when the head was deleted, or nothing when the
    /// list empties.
    pub fn delete_selected(&self) -> Result<NoteSession> {
        let mut inner = self.inner.write();
        let index = inner.selected_index().ok_or(SessionError::NoSelection)?;

        let removed = inner.sessions.remove(index);
        inner.selected_id = if inner.sessions.is_empty() {
            None
        } else {
            let neighbor = index.saturating_sub(1);
            Some(inner.sessions[neighbor].id.clone())
        };

        tracing::info!(note_id = %removed.id, title = %removed.title, "Deleted note");

        Ok(removed)
    }

    /// Rename the selected note. The title is trimmed; an empty result is
    /// rejected and nothing changes.
    pub fn rename_selected(&self, new_title: &str) -> Result<NoteSession> {
        let mut inner = self.inner.write();
        let index = inner.selected_index().ok_or(SessionError::NoSelection)?;

        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidTitle);
        }

        inner.sessions[index].set_title(trimmed.to_string());

        tracing::info!(note_id = %inner.sessions[index].id, title = %trimmed, "Renamed note");

        Ok(inner.sessions[index].clone())
    }

    /// Replace the selected note's text buffer
    pub fn update_selected_content(&self, content: String) -> Result<()> {
        let mut inner = self.inner.write();
        let index = inner.selected_index().ok_or(SessionError::NoSelection)?;
        inner.sessions[index].set_content(content);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().sessions.is_empty()
    }

    pub fn phase(&self) -> WorkspacePhase {
        if self.is_empty() {
            WorkspacePhase::Empty
        } else {
            WorkspacePhase::HasSessions
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_selects_new_note() {
        let manager = SessionManager::new();
        assert_eq!(manager.phase(), WorkspacePhase::Empty);

        for expected_len in 1..=3 {
            let note = manager.create_session();
            assert_eq!(manager.len(), expected_len);
            assert_eq!(manager.selected_id().as_deref(), Some(note.id.as_str()));
        }
        assert_eq!(manager.phase(), WorkspacePhase::HasSessions);
    }

    #[test]
    fn test_delete_on_empty_workspace() {
        let manager = SessionManager::new();
        assert!(matches!(
            manager.delete_selected(),
            Err(SessionError::NoSelection)
        ));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_delete_selects_prior_neighbor() {
        let manager = SessionManager::new();
        let first = manager.create_session();
        let second = manager.create_session();
        let third = manager.create_session();

        // third is selected; deleting it falls back to second
        manager.delete_selected().unwrap();
        assert_eq!(manager.selected_id().as_deref(), Some(second.id.as_str()));

        // existed before the delete
        assert!([&first.id, &second.id, &third.id]
            .contains(&&manager.selected_id().unwrap()));
    }

    #[test]
    fn test_delete_head_selects_next() {
        let manager = SessionManager::new();
        let first = manager.create_session();
        let second = manager.create_session();

        manager.select(&first.id).unwrap();
        manager.delete_selected().unwrap();
        assert_eq!(manager.selected_id().as_deref(), Some(second.id.as_str()));

        manager.delete_selected().unwrap();
        assert_eq!(manager.phase(), WorkspacePhase::Empty);
        assert!(matches!(
            manager.delete_selected(),
            Err(SessionError::NoSelection)
        ));
    }

    #[test]
    fn test_rename_trims_and_validates() {
        let manager = SessionManager::new();
        manager.create_session();

        assert!(matches!(
            manager.rename_selected(""),
            Err(SessionError::InvalidTitle)
        ));
        assert!(matches!(
            manager.rename_selected("   "),
            Err(SessionError::InvalidTitle)
        ));
        // rejected titles leave the default in place
        assert_eq!(manager.selected().unwrap().title, "New Note");

        let renamed = manager.rename_selected("  My Notes  ").unwrap();
        assert_eq!(renamed.title, "My Notes");
        assert_eq!(manager.selected().unwrap().title, "My Notes");
    }

    #[test]
    fn test_rename_without_selection() {
        let manager = SessionManager::new();
        assert!(matches!(
            manager.rename_selected("Anything"),
            Err(SessionError::NoSelection)
        ));
    }

    #[test]
    fn test_select_unknown_id() {
        let manager = SessionManager::new();
        manager.create_session();
        assert!(matches!(
            manager.select("no-such-id"),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_content() {
        let manager = SessionManager::new();
        manager.create_session();
        manager
            .update_selected_content("Buy milk".to_string())
            .unwrap();
        assert_eq!(manager.selected().unwrap().content, "Buy milk");
    }
}
