//! The quiz collection shared by every store backend.

use serde::{Deserialize, Serialize};

use quizdrill_core::error::StoreError;
use quizdrill_core::model::{NewQuiz, QuizId, QuizItem};

/// All stored quizzes plus the next id to hand out.
///
/// This is also the on-disk JSON layout of [`crate::JsonFileStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "first_id")]
    next_id: QuizId,
    #[serde(default)]
    quizzes: Vec<QuizItem>,
}

fn first_id() -> QuizId {
    1
}

fn id_after(id: QuizId) -> Result<QuizId, StoreError> {
    id.checked_add(1)
        .ok_or_else(|| StoreError::Invalid("quiz id space exhausted".into()))
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            quizzes: Vec::new(),
        }
    }
}

impl Catalog {
    /// A small set of capital-city quizzes to get started with.
    pub fn starter() -> Self {
        let quizzes: Vec<QuizItem> = [
            ("Capital of Italy", "Rome"),
            ("Capital of France", "Paris"),
            ("Capital of Spain", "Madrid"),
            ("Capital of Portugal", "Lisbon"),
        ]
        .into_iter()
        .zip(first_id()..)
        .map(|((question, answer), id)| QuizItem::new(id, question, answer))
        .collect();
        Self {
            next_id: first_id() + quizzes.len() as QuizId,
            quizzes,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.quizzes.sort_by_key(|q| q.id);
        // Hand-edited files may carry ids past the recorded counter.
        if let Some(max) = catalog.quizzes.last().map(|q| q.id) {
            catalog.next_id = catalog.next_id.max(id_after(max)?);
        }
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every quiz, ordered by id.
    pub fn items(&self) -> &[QuizItem] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn get(&self, id: QuizId) -> Result<&QuizItem, StoreError> {
        self.position(id).map(|i| &self.quizzes[i])
    }

    pub fn insert(&mut self, quiz: NewQuiz) -> Result<QuizItem, StoreError> {
        let quiz = quiz.validate()?;
        let next_id = id_after(self.next_id)?;
        let item = QuizItem::new(self.next_id, quiz.question, quiz.answer);
        self.next_id = next_id;
        self.quizzes.push(item.clone());
        Ok(item)
    }

    pub fn replace(&mut self, item: QuizItem) -> Result<QuizItem, StoreError> {
        let index = self.position(item.id)?;
        let draft = NewQuiz::from(&item).validate()?;
        let item = item.with_draft(draft);
        self.quizzes[index] = item.clone();
        Ok(item)
    }

    pub fn remove(&mut self, id: QuizId) -> Result<QuizItem, StoreError> {
        let index = self.position(id)?;
        Ok(self.quizzes.remove(index))
    }

    fn position(&self, id: QuizId) -> Result<usize, StoreError> {
        self.quizzes
            .binary_search_by_key(&id, |q| q.id)
            .map_err(|_| StoreError::NotFound(id))
    }
}
