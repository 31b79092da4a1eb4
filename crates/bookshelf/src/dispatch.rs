//! Routes resolver events to handlers.
//!
//! This is the only place where a [`ResolverError`] turns into `null`: the
//! caller sees `null` for a missing book, a store fault and a missing table
//! alike, while the log records which one it was.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use bookshelf_core::resolver::{ResolverError, ResolverField};
use bookshelf_core::storage::RepositoryError;

use crate::config::Config;
use crate::event::{ResolverEvent, ResolverInfo};
use crate::handlers;
use crate::state::AppState;

/// Resolves one field and returns its JSON result, `null` on any failure.
pub async fn dispatch(state: &AppState, event: ResolverEvent) -> Value {
    let field = format!("{}.{}", event.info.parent_type_name, event.info.field_name);

    match resolve(state, event).await {
        Ok(value) => value,
        Err(err) => {
            if err.is_client_error() {
                tracing::warn!(%field, error_type = err.error_type(), error = %err, "Resolver returned null");
            } else {
                tracing::error!(%field, error_type = err.error_type(), error = %err, "Resolver failed");
            }
            Value::Null
        }
    }
}

/// Resolves one field, keeping the failure kind.
pub async fn resolve(state: &AppState, event: ResolverEvent) -> Result<Value, ResolverError> {
    let field = route(&state.config, &event.info)?;
    tracing::debug!(%field, data_source = field.data_source_name(), "Resolving field");

    match field {
        ResolverField::ListBooks => to_value(handlers::list_books(state).await?),
        ResolverField::GetBookById => {
            let args = parse_arguments(event.arguments)?;
            to_value(handlers::get_book_by_id(state, args).await?)
        }
        ResolverField::CreateBook => {
            let args = parse_arguments(event.arguments)?;
            to_value(handlers::create_book(state, args).await?)
        }
        ResolverField::UpdateBook => {
            let args = parse_arguments(event.arguments)?;
            to_value(handlers::update_book(state, args).await?)
        }
    }
}

/// Maps the event to a field, honoring the field this deployment is bound to.
fn route(config: &Config, info: &ResolverInfo) -> Result<ResolverField, ResolverError> {
    let field = ResolverField::from_names(&info.parent_type_name, &info.field_name).ok_or_else(
        || ResolverError::UnexpectedField(format!("{}.{}", info.parent_type_name, info.field_name)),
    )?;

    match config.resolver_field {
        Some(bound) if bound != field => Err(ResolverError::UnexpectedField(field.to_string())),
        _ => Ok(field),
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ResolverError> {
    serde_json::from_value(arguments).map_err(|e| ResolverError::InvalidArguments(e.to_string()))
}

fn to_value<T: Serialize>(result: T) -> Result<Value, ResolverError> {
    serde_json::to_value(result)
        .map_err(|e| ResolverError::Store(RepositoryError::Serialization(e.to_string())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::handlers::test_support::{failing_state, misconfigured_state, state};
    use crate::storage::InMemoryRepository;

    fn event(value: Value) -> ResolverEvent {
        serde_json::from_value(value).unwrap()
    }

    fn list_books() -> ResolverEvent {
        ResolverEvent::new("Query", "listBooks", json!({}))
    }

    fn get_book(id: &str) -> ResolverEvent {
        ResolverEvent::new("Query", "getBookById", json!({ "bookId": id }))
    }

    fn create_book(book: Value) -> ResolverEvent {
        ResolverEvent::new("Mutation", "createBook", json!({ "book": book }))
    }

    fn update_book(book: Value) -> ResolverEvent {
        ResolverEvent::new("Mutation", "updateBook", json!({ "book": book }))
    }

    #[tokio::test]
    async fn test_create_list_update_get_scenario() {
        let (state, _) = state();

        let created = dispatch(&state, create_book(json!({ "id": "1", "name": "Dune" }))).await;
        assert_eq!(created, json!({ "id": "1", "title": "Dune" }));

        let listed = dispatch(&state, list_books()).await;
        assert_eq!(listed, json!([{ "id": "1", "title": "Dune" }]));

        let updated = dispatch(&state, update_book(json!({ "id": "1", "rating": 5 }))).await;
        assert_eq!(updated, json!({ "id": "1", "title": "Dune", "rating": 5 }));

        let fetched = dispatch(&state, get_book("1")).await;
        assert_eq!(fetched, json!({ "id": "1", "title": "Dune", "rating": 5 }));
    }

    #[tokio::test]
    async fn test_list_empty_table_is_empty_array() {
        let (state, _) = state();

        assert_eq!(dispatch(&state, list_books()).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_missing_book_is_null() {
        let (state, _) = state();

        assert_eq!(dispatch(&state, get_book("missing")).await, Value::Null);
        assert_eq!(
            resolve(&state, get_book("missing")).await,
            Err(ResolverError::NotFound {
                id: "missing".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_update_with_only_id_returns_item_unchanged() {
        let (state, _) = state();
        dispatch(
            &state,
            create_book(json!({ "id": "1", "title": "Dune", "completed": true })),
        )
        .await;

        let updated = dispatch(&state, update_book(json!({ "id": "1" }))).await;

        assert_eq!(updated, json!({ "id": "1", "title": "Dune", "completed": true }));
    }

    #[tokio::test]
    async fn test_misconfigured_fields_return_null_without_store_calls() {
        let (state, repo) = misconfigured_state();

        for event in [
            list_books(),
            get_book("1"),
            create_book(json!({ "id": "1" })),
            update_book(json!({ "id": "1", "rating": 5 })),
        ] {
            assert_eq!(dispatch(&state, event).await, Value::Null);
        }
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_store_fault_is_null() {
        let (state, repo) = failing_state();

        assert_eq!(dispatch(&state, list_books()).await, Value::Null);
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_arguments_skip_store() {
        let (state, repo) = state();

        let result = resolve(&state, create_book(json!({ "title": "No id" }))).await;

        assert!(matches!(result, Err(ResolverError::InvalidArguments(_))));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_field_is_rejected() {
        let (state, repo) = state();

        let result = resolve(
            &state,
            ResolverEvent::new("Mutation", "deleteBook", json!({ "bookId": "1" })),
        )
        .await;

        assert_eq!(
            result,
            Err(ResolverError::UnexpectedField("Mutation.deleteBook".to_string()))
        );
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_bound_deployment_rejects_other_fields() {
        let repo = InMemoryRepository::new();
        let config = Config {
            resolver_field: Some(ResolverField::ListBooks),
            ..Config::with_table("books")
        };
        let state = AppState::new(config, Arc::new(repo.clone()));

        assert_eq!(dispatch(&state, list_books()).await, json!([]));

        let result = resolve(&state, create_book(json!({ "id": "1" }))).await;
        assert_eq!(
            result,
            Err(ResolverError::UnexpectedField("Mutation.createBook".to_string()))
        );
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_full_appsync_event() {
        let (state, _) = state();
        dispatch(&state, create_book(json!({ "id": "7", "title": "Solaris" }))).await;

        let result = dispatch(
            &state,
            event(json!({
                "arguments": { "bookId": "7" },
                "identity": null,
                "source": null,
                "request": { "headers": {} },
                "prev": null,
                "info": {
                    "parentTypeName": "Query",
                    "fieldName": "getBookById",
                    "variables": {},
                    "selectionSetList": ["id", "title"]
                },
                "stash": {}
            })),
        )
        .await;

        assert_eq!(result, json!({ "id": "7", "title": "Solaris" }));
    }
}
