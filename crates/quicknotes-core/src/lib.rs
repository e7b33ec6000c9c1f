//! quicknotes core
//!
//! Coordination layer for the quicknotes app. Owns the session state and
//! the save flow; the terminal front end is purely a renderer over this.

mod config;
mod error;
mod save;
mod workspace;

pub use config::Config;
pub use error::CoreError;
pub use save::{
    resolve_destination, DestinationPicker, DiskWriter, FixedDestination, NoteWriter, SaveOutcome,
};
pub use workspace::Workspace;

// Re-export session components
pub use quicknotes_sessions::{NoteSession, SessionError, SessionManager, WorkspacePhase};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// The terminal UI owns stdout, so logging is opt-in via `QUICKNOTES_LOG`
/// (a tracing filter, e.g. `debug`) and goes to a file
/// (`QUICKNOTES_LOG_FILE`, default `/tmp/quicknotes.log`).
pub fn init_logging() {
    use std::sync::Arc;
    use tracing_subscriber::{fmt, EnvFilter};

    let Ok(filter) = std::env::var("QUICKNOTES_LOG") else {
        return;
    };
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let path = std::env::var("QUICKNOTES_LOG_FILE")
        .unwrap_or_else(|_| "/tmp/quicknotes.log".to_string());
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
}
