//! In-memory question store.

use std::sync::Mutex;

use async_trait::async_trait;

use quizdrill_core::error::StoreError;
use quizdrill_core::model::{NewQuiz, QuizId, QuizItem};
use quizdrill_core::traits::QuestionStore;

use crate::catalog::Catalog;

/// A store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: Mutex<Catalog>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    fn with<T>(
        &self,
        f: impl FnOnce(&mut Catalog) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut catalog = self
            .catalog
            .lock()
            .map_err(|_| StoreError::Io(std::io::Error::other("store lock poisoned")))?;
        f(&mut catalog)
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<QuizItem>, StoreError> {
        self.with(|c| Ok(c.items().to_vec()))
    }

    async fn get(&self, id: QuizId) -> Result<QuizItem, StoreError> {
        self.with(|c| c.get(id).cloned())
    }

    async fn create(&self, quiz: NewQuiz) -> Result<QuizItem, StoreError> {
        self.with(|c| c.insert(quiz))
    }

    async fn update(&self, quiz: QuizItem) -> Result<QuizItem, StoreError> {
        self.with(|c| c.replace(quiz))
    }

    async fn delete(&self, id: QuizId) -> Result<(), StoreError> {
        self.with(|c| c.remove(id).map(|_| ()))
    }
}
