//! Core trait definitions for question stores and prompters.
//!
//! These async traits are implemented by the `quizdrill-store` and
//! `quizdrill-cli` crates respectively.

use async_trait::async_trait;

use crate::error::{PromptError, StoreError};
use crate::model::{NewQuiz, QuizId, QuizItem};

// ---------------------------------------------------------------------------
// Question store trait
// ---------------------------------------------------------------------------

/// Trait for backends that persist quiz records.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Human-readable backend name (e.g. "json-file").
    fn name(&self) -> &str;

    /// Snapshot of every stored quiz, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<QuizItem>, StoreError>;

    /// Fetch a single quiz.
    async fn get(&self, id: QuizId) -> Result<QuizItem, StoreError>;

    /// Validate and insert a new quiz, returning it with its assigned id.
    async fn create(&self, quiz: NewQuiz) -> Result<QuizItem, StoreError>;

    /// Validate and overwrite an existing quiz.
    async fn update(&self, quiz: QuizItem) -> Result<QuizItem, StoreError>;

    /// Remove a quiz.
    async fn delete(&self, id: QuizId) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Prompter trait
// ---------------------------------------------------------------------------

/// Trait for interactive input channels.
///
/// `ask` takes `&mut self`: a prompter can have at most one question in
/// flight.
#[async_trait]
pub trait Prompter: Send {
    /// Show `prompt` and wait for one line of input, returned trimmed.
    async fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}
