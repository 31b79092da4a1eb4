use super::error::BookError;
use super::types::Book;

/// Validates a partition key before it is sent to the store.
pub fn validate_book_id(id: &str) -> Result<(), BookError> {
    if id.trim().is_empty() {
        return Err(BookError::EmptyId);
    }
    Ok(())
}

/// Validates a book before it is written.
pub fn validate_book(book: &Book) -> Result<(), BookError> {
    validate_book_id(&book.id)
}
