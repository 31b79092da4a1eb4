use std::{env, time::Duration};

use bookshelf_core::resolver::{ResolverError, ResolverField};

/// Environment variable holding the books table name.
pub const BOOKS_TABLE: &str = "BOOKS_TABLE";

/// Resolver configuration loaded from environment variables.
///
/// Built once at cold start and shared by every invocation. A missing table
/// name is kept as `None` instead of failing startup, so each handler can
/// report it and return no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Books table name (`BOOKS_TABLE`).
    pub books_table: Option<String>,
    /// Field this deployment is bound to (`RESOLVER_FIELD`, e.g. `Query.listBooks`).
    /// `None` accepts all book fields.
    pub resolver_field: Option<ResolverField>,
    /// Delay before the `getBookById` lookup (`GET_BOOK_DELAY_MS`, default: 0)
    pub get_book_delay_ms: u64,
    /// DynamoDB endpoint override for local development (`DYNAMODB_ENDPOINT`).
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOOKS_TABLE` - Books table name (no default)
    /// - `RESOLVER_FIELD` - Bound field as `Type.field` (default: all fields)
    /// - `GET_BOOK_DELAY_MS` - Artificial lookup delay (default: 0)
    /// - `DYNAMODB_ENDPOINT` - Endpoint URL override (default: AWS)
    pub fn from_env() -> Self {
        Self {
            books_table: non_empty_var(BOOKS_TABLE),
            resolver_field: non_empty_var("RESOLVER_FIELD").and_then(|v| match v.parse() {
                Ok(field) => Some(field),
                Err(err) => {
                    tracing::warn!(value = %v, error = %err, "Ignoring RESOLVER_FIELD");
                    None
                }
            }),
            get_book_delay_ms: env::var("GET_BOOK_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            dynamodb_endpoint: non_empty_var("DYNAMODB_ENDPOINT"),
        }
    }

    /// Creates a configuration bound to `table` with every other option at its default.
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            books_table: Some(table.into()),
            ..Self::default()
        }
    }

    /// Returns the table name, or `Misconfigured` when it was not provided.
    pub fn table_name(&self) -> Result<&str, ResolverError> {
        self.books_table
            .as_deref()
            .ok_or(ResolverError::Misconfigured(BOOKS_TABLE))
    }

    /// Get the `getBookById` delay as a Duration.
    pub fn get_book_delay(&self) -> Duration {
        Duration::from_millis(self.get_book_delay_ms)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
