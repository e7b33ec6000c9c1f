//! Core error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Session(#[from] quicknotes_sessions::SessionError),

    #[error("cannot save an empty note")]
    EmptyContent,

    #[error("failed to save note to {}: {source}", path.display())]
    SaveIo { path: PathBuf, source: io::Error },
}
