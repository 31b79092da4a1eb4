//! DynamoDB repository implementation.
//!
//! Implements `BookRepository` from `bookshelf_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use bookshelf_core::book::{Book, UpdateBookInput};
use bookshelf_core::storage::{BookRepository, RepositoryError, Result};

use super::conversions::{book_key, book_to_item, item_to_book, ID};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error, map_update_item_error};
use super::expression::UpdateExpression;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one SDK client for the lifetime of the process. The client is
/// stateless from the caller's point of view and safe to share.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    ///
    /// `config.dynamodb_endpoint`, when set, overrides the service endpoint
    /// (DynamoDB Local).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl BookRepository for DynamoDbRepository {
    async fn list_books(&self, table: &str) -> Result<Vec<Book>> {
        let result = self
            .client
            .scan()
            .table_name(table)
            .send()
            .await
            .map_err(map_scan_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::debug!(table, "Scan returned a partial page, remaining items are skipped");
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_book).collect()
    }

    async fn get_book(&self, table: &str, id: &str) -> Result<Option<Book>> {
        let (key, value) = book_key(id);
        let result = self
            .client
            .get_item()
            .table_name(table)
            .key(key, value)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_book(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_book(&self, table: &str, book: &Book) -> Result<()> {
        let item = book_to_item(book);

        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_book(&self, table: &str, update: &UpdateBookInput) -> Result<Book> {
        // Nothing to write: read the current image instead of an empty UpdateItem.
        if !update.has_changes() {
            let (key, value) = book_key(&update.id);
            let result = self
                .client
                .get_item()
                .table_name(table)
                .key(key, value)
                .consistent_read(true)
                .send()
                .await
                .map_err(map_get_item_error)?;

            return match result.item {
                Some(item) => item_to_book(&item),
                None => Err(RepositoryError::NotFound {
                    entity_type: "Book",
                    id: update.id.clone(),
                }),
            };
        }

        let expression = UpdateExpression::from_changes(&update.changes());
        let (key, value) = book_key(&update.id);

        let mut request = self
            .client
            .update_item()
            .table_name(table)
            .key(key, value)
            .set_update_expression(expression.expression())
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ID)
            .return_values(ReturnValue::AllNew);

        for (placeholder, name) in expression.names() {
            request = request.expression_attribute_names(placeholder, name);
        }
        for (placeholder, value) in expression.values() {
            request = request.expression_attribute_values(placeholder, value.clone());
        }

        let result = request
            .send()
            .await
            .map_err(|e| map_update_item_error(e, update.id.clone()))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::QueryFailed("UpdateItem returned no attributes".to_string())
        })?;

        item_to_book(&attributes)
    }
}

#[cfg(all(test, feature = "dynamodb-local"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
    use aws_sdk_dynamodb::types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    };
    use bookshelf_core::book::BookField;

    use super::*;

    static TABLES: AtomicUsize = AtomicUsize::new(0);

    fn client() -> Client {
        let endpoint = std::env::var("DYNAMODB_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("local", "local", None, None, "local"))
            .endpoint_url(endpoint)
            .build();

        Client::from_conf(config)
    }

    /// Creates a fresh books table and returns its name.
    async fn create_table(client: &Client) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let table = format!("books-{}-{}", nanos, TABLES.fetch_add(1, Ordering::SeqCst));

        client
            .create_table()
            .table_name(&table)
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(ID)
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(ID)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .unwrap();

        table
    }

    async fn setup() -> (DynamoDbRepository, String) {
        let client = client();
        let table = create_table(&client).await;
        (DynamoDbRepository::new(client), table)
    }

    fn dune() -> Book {
        Book::new("1")
            .with_title("Dune")
            .with_completed(false)
            .with_reviews(["classic"])
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let (repo, table) = setup().await;

        repo.put_book(&table, &dune()).await.unwrap();

        assert_eq!(repo.get_book(&table, "1").await.unwrap(), Some(dune()));
        assert_eq!(repo.get_book(&table, "2").await.unwrap(), None);
        assert_eq!(repo.list_books(&table).await.unwrap(), vec![dune()]);
    }

    #[tokio::test]
    async fn test_update_rating_keeps_other_attributes() {
        let (repo, table) = setup().await;
        repo.put_book(&table, &dune()).await.unwrap();

        let updated = repo
            .update_book(&table, &UpdateBookInput::new("1").with_rating(5))
            .await
            .unwrap();

        assert_eq!(updated, dune().with_rating(5));
        assert_eq!(repo.get_book(&table, "1").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_with_only_id_returns_item_unchanged() {
        let (repo, table) = setup().await;
        repo.put_book(&table, &dune()).await.unwrap();

        let updated = repo
            .update_book(&table, &UpdateBookInput::new("1"))
            .await
            .unwrap();

        assert_eq!(updated, dune());
    }

    #[tokio::test]
    async fn test_update_clears_null_attribute() {
        let (repo, table) = setup().await;
        repo.put_book(&table, &dune()).await.unwrap();

        let update = UpdateBookInput::new("1")
            .clearing(BookField::Title)
            .with_completed(true);
        let updated = repo.update_book(&table, &update).await.unwrap();

        let expected = Book::new("1").with_completed(true).with_reviews(["classic"]);
        assert_eq!(updated, expected);
        assert_eq!(repo.get_book(&table, "1").await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (repo, table) = setup().await;

        let result = repo
            .update_book(&table, &UpdateBookInput::new("404").with_rating(1))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

        let result = repo.update_book(&table, &UpdateBookInput::new("404")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

        assert_eq!(repo.get_book(&table, "404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_table_is_a_fault() {
        let repo = DynamoDbRepository::new(client());

        let result = repo.list_books("no-such-table").await;

        assert!(result.is_err());
    }
}
