use bookshelf_core::book::{validate_book, Book};
use bookshelf_core::resolver::ResolverError;

use crate::event::CreateBookArgs;
use crate::state::AppState;

/// Resolves `Mutation.createBook`.
///
/// Writes the whole book without an existence check, so an existing book with
/// the same id is replaced. Returns the input, since the put returns no item.
pub async fn create_book(state: &AppState, args: CreateBookArgs) -> Result<Book, ResolverError> {
    let table = state.config.table_name()?;
    let book = args.book;
    validate_book(&book)?;

    tracing::debug!(table, id = %book.id, "Putting book");
    state.books.put_book(table, &book).await?;

    Ok(book)
}
