//! Error types shared by the engine and its collaborators.
//!
//! Defined in `quizdrill-core` so that store backends and prompters in other
//! crates report failures the session engine can carry into its outcome.

use thiserror::Error;

use crate::model::QuizId;

/// Errors raised while waiting for the player's input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    /// The user requested shutdown (e.g. Ctrl-C).
    #[error("interrupted")]
    Interrupted,

    /// Reading from or writing to the terminal failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a question store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No quiz exists with the given id.
    #[error("no quiz with id={0}")]
    NotFound(QuizId),

    /// A quiz failed validation.
    #[error("invalid quiz: {0}")]
    Invalid(String),

    /// The backing file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid store JSON.
    #[error("malformed store data: {0}")]
    Format(#[from] serde_json::Error),
}
