//! Workspace phase
//!
//! ```text
//! Empty
//!   ↓ new note
//! HasSessions
//!   ↓ delete last note
//! Empty
//! ```
//!
//! Phase membership is a function of how many sessions are open, so it is
//! derived from the manager rather than stored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePhase {
    /// No notes are open; nothing is selected
    Empty,
    /// At least one note is open and exactly one is selected
    HasSessions,
}

impl WorkspacePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspacePhase::Empty => "empty",
            WorkspacePhase::HasSessions => "has-sessions",
        }
    }
}

impl std::fmt::Display for WorkspacePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
