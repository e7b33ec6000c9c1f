//! quicknotes session management
//!
//! A session is one open note: a title plus an in-memory text buffer,
//! shown as one tab. Sessions exist only for the lifetime of the process;
//! the only durable artifact is whatever the user saves to disk.

mod error;
mod manager;
mod note;
mod phase;

pub use error::SessionError;
pub use manager::SessionManager;
pub use note::NoteSession;
pub use phase::WorkspacePhase;

pub type Result<T> = std::result::Result<T, SessionError>;
