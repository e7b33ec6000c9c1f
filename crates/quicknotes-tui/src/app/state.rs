//! Application state types.
//!
//! `App` holds everything the event loop mutates: which screen is shown,
//! the editor cursor, and any active overlay. Note state lives in the
//! core `Workspace`.

use quicknotes_core::{Config, NoteSession, Workspace};

/// Which screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Launch,
    Workspace,
}

/// The highlighted action on the launch screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAction {
    Start,
    Exit,
}

impl LaunchAction {
    pub fn toggled(self) -> Self {
        match self {
            LaunchAction::Start => LaunchAction::Exit,
            LaunchAction::Exit => LaunchAction::Start,
        }
    }
}

/// What a confirmed text prompt feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Rename,
    SaveAs,
}

/// Modal text-entry overlay. While present it captures all input.
#[derive(Debug)]
pub struct PromptOverlay {
    pub kind: PromptKind,
    pub title: String,
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Modal notification. Any key dismisses it.
#[derive(Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Main application state container.
pub struct App {
    pub workspace: Workspace,
    pub screen: Screen,
    pub launch_action: LaunchAction,
    /// Editor cursor as a char offset into the selected note's content
    pub cursor: usize,
    pub prompt: Option<PromptOverlay>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_workspace(Workspace::new(Config::default()))
    }

    pub fn with_workspace(workspace: Workspace) -> Self {
        Self {
            workspace,
            screen: Screen::Launch,
            launch_action: LaunchAction::Start,
            cursor: 0,
            prompt: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Start action: enter the workspace screen, seeding the default note
    /// on the very first entry only.
    pub fn enter_workspace(&mut self) {
        self.workspace.start();
        self.screen = Screen::Workspace;
        self.cursor_to_end();
    }

    pub fn selected_note(&self) -> Option<NoteSession> {
        self.workspace.session_manager().selected()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?level, %message, "Notice shown");
        self.notice = Some(Notice { level, message });
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self
            .selected_note()
            .map(|n| n.content.chars().count())
            .unwrap_or(0);
    }

    /// Cycle tab selection by `step` (+1 / -1), wrapping around.
    pub fn cycle_selection(&mut self, step: isize) {
        let sessions = self.workspace.session_manager().sessions();
        let Some(index) = self.workspace.session_manager().selected_index() else {
            return;
        };

        let len = sessions.len() as isize;
        let next = (index as isize + step).rem_euclid(len) as usize;
        let _ = self.workspace.select(&sessions[next].id);
        self.cursor_to_end();
    }

    // Editor operations. All are no-ops when nothing is selected.

    fn edit_content<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Vec<char>, &mut usize),
    {
        let Some(note) = self.selected_note() else {
            return;
        };

        let mut chars: Vec<char> = note.content.chars().collect();
        let mut cursor = self.cursor.min(chars.len());
        edit(&mut chars, &mut cursor);
        self.cursor = cursor;

        let _ = self
            .workspace
            .update_selected_content(chars.into_iter().collect());
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit_content(|chars, cursor| {
            chars.insert(*cursor, c);
            *cursor += 1;
        });
    }

    pub fn backspace(&mut self) {
        self.edit_content(|chars, cursor| {
            if *cursor > 0 {
                chars.remove(*cursor - 1);
                *cursor -= 1;
            }
        });
    }

    pub fn delete_forward(&mut self) {
        self.edit_content(|chars, cursor| {
            if *cursor < chars.len() {
                chars.remove(*cursor);
            }
        });
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self
            .selected_note()
            .map(|n| n.content.chars().count())
            .unwrap_or(0);
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let Some(note) = self.selected_note() else {
            return;
        };
        let chars: Vec<char> = note.content.chars().collect();
        let mut cursor = self.cursor.min(chars.len());
        while cursor > 0 && chars[cursor - 1] != '\n' {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let Some(note) = self.selected_note() else {
            return;
        };
        let chars: Vec<char> = note.content.chars().collect();
        let mut cursor = self.cursor.min(chars.len());
        while cursor < chars.len() && chars[cursor] != '\n' {
            cursor += 1;
        }
        self.cursor = cursor;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
