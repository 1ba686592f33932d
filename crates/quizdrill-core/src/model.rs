//! Core data model types for quizdrill.
//!
//! These are the records the store hands out and the session engine plays.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreError;

/// Identifier of a stored quiz.
pub type QuizId = u64;

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Store-assigned identifier.
    pub id: QuizId,
    /// The question shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

impl QuizItem {
    pub fn new(id: QuizId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Replace question and answer, keeping the id.
    pub fn with_draft(mut self, draft: NewQuiz) -> Self {
        self.question = draft.question;
        self.answer = draft.answer;
        self
    }
}

impl fmt::Display for QuizItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {} => {}", self.id, self.question, self.answer)
    }
}

/// A quiz that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuiz {
    pub question: String,
    pub answer: String,
}

impl NewQuiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Trim both fields and reject blank ones.
    pub fn validate(self) -> Result<Self, StoreError> {
        let question = self.question.trim().to_string();
        let answer = self.answer.trim().to_string();
        if question.is_empty() {
            return Err(StoreError::Invalid("question must not be empty".into()));
        }
        if answer.is_empty() {
            return Err(StoreError::Invalid("answer must not be empty".into()));
        }
        Ok(Self { question, answer })
    }
}

impl From<&QuizItem> for NewQuiz {
    fn from(item: &QuizItem) -> Self {
        Self {
            question: item.question.clone(),
            answer: item.answer.clone(),
        }
    }
}
