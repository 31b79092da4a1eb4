use bookshelf_core::book::{validate_book_id, Book};
use bookshelf_core::resolver::ResolverError;

use crate::event::UpdateBookArgs;
use crate::state::AppState;

/// Resolves `Mutation.updateBook`.
///
/// Only the attributes present in the input are written; one sent as `null`
/// is cleared. Returns the whole book as it is after the update, unchanged
/// attributes included.
pub async fn update_book(state: &AppState, args: UpdateBookArgs) -> Result<Book, ResolverError> {
    let table = state.config.table_name()?;
    let update = args.book;
    validate_book_id(&update.id)?;

    tracing::debug!(
        table,
        id = %update.id,
        changes = update.changes().len(),
        "Updating book"
    );
    let book = state.books.update_book(table, &update).await?;

    Ok(book)
}
