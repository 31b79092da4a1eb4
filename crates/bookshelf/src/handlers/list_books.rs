use bookshelf_core::book::Book;
use bookshelf_core::resolver::ResolverError;

use crate::state::AppState;

/// Resolves `Query.listBooks`: every book in the table, in store order.
pub async fn list_books(state: &AppState) -> Result<Vec<Book>, ResolverError> {
    let table = state.config.table_name()?;

    tracing::debug!(table, "Listing books");
    let books = state.books.list_books(table).await?;

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{failing_state, misconfigured_state, state, TABLE};

    #[tokio::test]
    async fn test_list_empty_table_returns_empty_list() {
        let (state, _) = state();

        let books = list_books(&state).await.unwrap();

        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_stored_books() {
        let (state, repo) = state();
        state
            .books
            .put_book(TABLE, &Book::new("1").with_title("Dune"))
            .await
            .unwrap();
        state
            .books
            .put_book(TABLE, &Book::new("2").with_title("Hyperion"))
            .await
            .unwrap();

        let mut books = list_books(&state).await.unwrap();
        books.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(
            books,
            vec![
                Book::new("1").with_title("Dune"),
                Book::new("2").with_title("Hyperion"),
            ]
        );
        assert_eq!(repo.calls(), 3);
    }

    #[tokio::test]
    async fn test_list_without_table_skips_store() {
        let (state, repo) = misconfigured_state();

        let result = list_books(&state).await;

        assert_eq!(result, Err(ResolverError::Misconfigured("BOOKS_TABLE")));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_list_store_fault() {
        let (state, repo) = failing_state();

        let result = list_books(&state).await;

        assert!(matches!(result, Err(ResolverError::Store(_))));
        assert_eq!(repo.calls(), 1);
    }
}
