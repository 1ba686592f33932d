//! JSON-file question store.
//!
//! The whole catalog is read on every call and rewritten on every change.
//! Writes go to a sibling temp file which is then renamed over the original.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use quizdrill_core::error::StoreError;
use quizdrill_core::model::{NewQuiz, QuizId, QuizItem};
use quizdrill_core::traits::QuestionStore;

use crate::catalog::Catalog;

/// A store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file reads as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `catalog` unless the file already exists.
    ///
    /// Returns `true` if the file was created.
    pub async fn initialize(&self, catalog: &Catalog) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        self.save(catalog).await?;
        Ok(true)
    }

    async fn load(&self) -> Result<Catalog, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Catalog::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Catalog::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let json = catalog.to_json()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(
            path = %self.path.display(),
            count = catalog.len(),
            "wrote quiz store"
        );
        Ok(())
    }

    async fn modify<T>(
        &self,
        f: impl FnOnce(&mut Catalog) -> Result<T, StoreError> + Send,
    ) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        let mut catalog = self.load().await?;
        let value = f(&mut catalog)?;
        self.save(&catalog).await?;
        Ok(value)
    }
}

#[async_trait]
impl QuestionStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch_all(&self) -> Result<Vec<QuizItem>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.items().to_vec())
    }

    async fn get(&self, id: QuizId) -> Result<QuizItem, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await?.get(id).cloned()
    }

    async fn create(&self, quiz: NewQuiz) -> Result<QuizItem, StoreError> {
        self.modify(move |c| c.insert(quiz)).await
    }

    async fn update(&self, quiz: QuizItem) -> Result<QuizItem, StoreError> {
        self.modify(move |c| c.replace(quiz)).await
    }

    async fn delete(&self, id: QuizId) -> Result<(), StoreError> {
        self.modify(move |c| c.remove(id).map(|_| ())).await
    }
}
