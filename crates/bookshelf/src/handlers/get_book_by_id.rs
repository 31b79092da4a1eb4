use bookshelf_core::book::{validate_book_id, Book};
use bookshelf_core::resolver::ResolverError;

use crate::event::GetBookByIdArgs;
use crate::state::AppState;

/// Resolves `Query.getBookById`.
///
/// Sleeps for the configured `getBookById` delay before the lookup. A missing
/// item is reported as [`ResolverError::NotFound`].
pub async fn get_book_by_id(state: &AppState, args: GetBookByIdArgs) -> Result<Book, ResolverError> {
    let table = state.config.table_name()?;
    validate_book_id(&args.book_id)?;

    let delay = state.config.get_book_delay();
    if !delay.is_zero() {
        tracing::debug!(delay_ms = state.config.get_book_delay_ms, "Delaying book lookup");
        tokio::time::sleep(delay).await;
    }

    tracing::debug!(table, id = %args.book_id, "Getting book");
    let book = state.books.get_book(table, &args.book_id).await?;

    book.ok_or(ResolverError::NotFound { id: args.book_id })
}
