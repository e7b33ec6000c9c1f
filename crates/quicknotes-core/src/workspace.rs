//! Workspace coordinator
//!
//! The central state container for the app: one session manager plus the
//! save flow. The terminal front end renders this and forwards user
//! actions; it never holds note state of its own.

use parking_lot::RwLock;

use quicknotes_sessions::{NoteSession, SessionError, SessionManager, WorkspacePhase};

use crate::config::Config;
use crate::error::CoreError;
use crate::save::{DestinationPicker, NoteWriter, SaveOutcome};
use crate::Result;

pub struct Workspace {
    config: Config,
    sessions: SessionManager,
    /// Whether the workspace screen has been entered at least once
    started: RwLock<bool>,
}

impl Workspace {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: SessionManager::new(),
            started: RwLock::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.sessions
    }

    /// Enter the workspace. The first entry seeds one default note;
    /// returning later resumes whatever sessions are open.
    pub fn start(&self) {
        let mut started = self.started.write();
        if !*started {
            self.sessions.create_session();
            *started = true;
        }
    }

    pub fn new_note(&self) -> NoteSession {
        self.sessions.create_session()
    }

    pub fn delete_selected(&self) -> Result<NoteSession> {
        Ok(self.sessions.delete_selected()?)
    }

    pub fn rename_selected(&self, new_title: &str) -> Result<NoteSession> {
        Ok(self.sessions.rename_selected(new_title)?)
    }

    pub fn select(&self, note_id: &str) -> Result<NoteSession> {
        Ok(self.sessions.select(note_id)?)
    }

    pub fn update_selected_content(&self, content: String) -> Result<()> {
        Ok(self.sessions.update_selected_content(content)?)
    }

    pub fn phase(&self) -> WorkspacePhase {
        self.sessions.phase()
    }

    /// Save the selected note's trimmed content.
    ///
    /// Content is validated before the destination prompt is shown, and a
    /// dismissed prompt is a silent no-op, not an error.
    pub fn save_selected(
        &self,
        picker: &dyn DestinationPicker,
        writer: &dyn NoteWriter,
    ) -> Result<SaveOutcome> {
        let note = self.sessions.selected().ok_or(SessionError::NoSelection)?;

        let content = note.trimmed_content().to_string();
        if content.is_empty() {
            return Err(CoreError::EmptyContent);
        }

        let Some(path) = picker.pick_destination() else {
            tracing::debug!(note_id = %note.id, "Save cancelled at destination prompt");
            return Ok(SaveOutcome::Cancelled);
        };

        writer.write_note(&path, &content).map_err(|source| {
            tracing::warn!(note_id = %note.id, path = %path.display(), error = %source, "Save failed");
            CoreError::SaveIo {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(note_id = %note.id, path = %path.display(), "Saved note");

        Ok(SaveOutcome::Saved(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::path::{Path, PathBuf};

    struct CountingPicker {
        destination: Option<PathBuf>,
        calls: Cell<usize>,
    }

    impl CountingPicker {
        fn some(path: &str) -> Self {
            Self {
                destination: Some(PathBuf::from(path)),
                calls: Cell::new(0),
            }
        }

        fn cancelled() -> Self {
            Self {
                destination: None,
                calls: Cell::new(0),
            }
        }
    }

    impl DestinationPicker for CountingPicker {
        fn pick_destination(&self) -> Option<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            self.destination.clone()
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        writes: RefCell<Vec<(PathBuf, String)>>,
    }

    impl NoteWriter for RecordingWriter {
        fn write_note(&self, path: &Path, content: &str) -> io::Result<()> {
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    struct FailingWriter;

    impl NoteWriter for FailingWriter {
        fn write_note(&self, _path: &Path, _content: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn workspace_with_note(content: &str) -> Workspace {
        let workspace = Workspace::new(Config::new(PathBuf::from("/tmp")));
        workspace.start();
        workspace
            .update_selected_content(content.to_string())
            .unwrap();
        workspace
    }

    #[test]
    fn test_start_seeds_one_note_once() {
        let workspace = Workspace::new(Config::default());
        assert_eq!(workspace.phase(), WorkspacePhase::Empty);

        workspace.start();
        assert_eq!(workspace.session_manager().len(), 1);

        // back to launch and in again: same sessions, no new seed
        workspace.start();
        assert_eq!(workspace.session_manager().len(), 1);

        // even after the user closes every note
        workspace.delete_selected().unwrap();
        workspace.start();
        assert_eq!(workspace.phase(), WorkspacePhase::Empty);
    }

    #[test]
    fn test_save_writes_trimmed_content_once() {
        let workspace = workspace_with_note("Buy milk");
        let picker = CountingPicker::some("/tmp/note.txt");
        let writer = RecordingWriter::default();

        let outcome = workspace.save_selected(&picker, &writer).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(PathBuf::from("/tmp/note.txt")));
        let writes = writer.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0], (PathBuf::from("/tmp/note.txt"), "Buy milk".to_string()));
    }

    #[test]
    fn test_save_trims_surrounding_whitespace() {
        let workspace = workspace_with_note("  Buy milk\n\n");
        let picker = CountingPicker::some("/tmp/note.txt");
        let writer = RecordingWriter::default();

        workspace.save_selected(&picker, &writer).unwrap();
        assert_eq!(writer.writes.borrow()[0].1, "Buy milk");
    }

    #[test]
    fn test_save_empty_content_never_prompts() {
        let workspace = workspace_with_note("   ");
        let picker = CountingPicker::some("/tmp/note.txt");
        let writer = RecordingWriter::default();

        assert!(matches!(
            workspace.save_selected(&picker, &writer),
            Err(CoreError::EmptyContent)
        ));
        assert_eq!(picker.calls.get(), 0);
        assert!(writer.writes.borrow().is_empty());
    }

    #[test]
    fn test_save_without_selection() {
        let workspace = Workspace::new(Config::default());
        let picker = CountingPicker::some("/tmp/note.txt");
        let writer = RecordingWriter::default();

        assert!(matches!(
            workspace.save_selected(&picker, &writer),
            Err(CoreError::Session(SessionError::NoSelection))
        ));
    }

    #[test]
    fn test_save_cancelled_is_silent_noop() {
        let workspace = workspace_with_note("Buy milk");
        let picker = CountingPicker::cancelled();
        let writer = RecordingWriter::default();

        let outcome = workspace.save_selected(&picker, &writer).unwrap();
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(writer.writes.borrow().is_empty());
    }

    #[test]
    fn test_save_io_failure_carries_path() {
        let workspace = workspace_with_note("Buy milk");
        let picker = CountingPicker::some("/root/forbidden.txt");

        match workspace.save_selected(&picker, &FailingWriter) {
            Err(CoreError::SaveIo { path, .. }) => {
                assert_eq!(path, PathBuf::from("/root/forbidden.txt"));
            }
            other => panic!("expected SaveIo, got {other:?}"),
        }
    }
}
