//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no note is selected")]
    NoSelection,

    #[error("note title cannot be empty")]
    InvalidTitle,

    #[error("note not found: {0}")]
    NotFound(String),
}
