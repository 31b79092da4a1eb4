//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookshelf_core::book::{Book, UpdateBookInput};
use bookshelf_core::storage::{BookRepository, RepositoryError, Result};

type Table = HashMap<String, Book>;

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Every trait call is counted, including failed ones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<HashMap<String, Table>>>,
    calls: Arc<AtomicUsize>,
    failure: Option<RepositoryError>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose every call fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn list_books(&self, table: &str) -> Result<Vec<Book>> {
        self.begin_call()?;
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|books| books.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_book(&self, table: &str, id: &str) -> Result<Option<Book>> {
        self.begin_call()?;
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|books| books.get(id)).cloned())
    }

    async fn put_book(&self, table: &str, book: &Book) -> Result<()> {
        self.begin_call()?;
        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(book.id.clone(), book.clone());
        Ok(())
    }

    async fn update_book(&self, table: &str, update: &UpdateBookInput) -> Result<Book> {
        self.begin_call()?;
        let mut tables = self.tables.write().await;
        let book = tables
            .get_mut(table)
            .and_then(|books| books.get_mut(&update.id))
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Book",
                id: update.id.clone(),
            })?;
        update.apply_to(book);
        Ok(book.clone())
    }
}
