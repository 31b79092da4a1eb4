use async_trait::async_trait;

use crate::book::{Book, UpdateBookInput};

use super::Result;

/// Repository for book operations.
///
/// Every call names the table it targets. The table name comes from process
/// configuration, so a deployment without one never reaches the repository.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every book in the table, in store order.
    ///
    /// Only the first page of a paginated store is returned.
    async fn list_books(&self, table: &str) -> Result<Vec<Book>>;

    /// Gets a book by its id.
    async fn get_book(&self, table: &str, id: &str) -> Result<Option<Book>>;

    /// Writes the whole book, replacing any item with the same id.
    async fn put_book(&self, table: &str, book: &Book) -> Result<()>;

    /// Sets the attributes present in `update` on an existing book and returns
    /// the complete book after the update.
    ///
    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when no book has `update.id`.
    async fn update_book(&self, table: &str, update: &UpdateBookInput) -> Result<Book>;
}
