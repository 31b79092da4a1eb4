//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and books.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bookshelf_core::book::{Book, FieldValue};
use bookshelf_core::storage::RepositoryError;

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const COMPLETED: &str = "completed";
pub const RATING: &str = "rating";
pub const REVIEWS: &str = "reviews";

/// Key of the item holding book `id`.
pub fn book_key(id: &str) -> (String, AttributeValue) {
    (ID.to_string(), AttributeValue::S(id.to_string()))
}

/// Convert a Book to DynamoDB item. Unset attributes are left out.
pub fn book_to_item(book: &Book) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ID.to_string(), AttributeValue::S(book.id.clone()));

    if let Some(title) = &book.title {
        item.insert(TITLE.to_string(), AttributeValue::S(title.clone()));
    }
    if let Some(completed) = book.completed {
        item.insert(COMPLETED.to_string(), AttributeValue::Bool(completed));
    }
    if let Some(rating) = book.rating {
        item.insert(RATING.to_string(), AttributeValue::N(rating.to_string()));
    }
    if let Some(reviews) = &book.reviews {
        item.insert(
            REVIEWS.to_string(),
            AttributeValue::L(reviews.iter().cloned().map(AttributeValue::S).collect()),
        );
    }

    item
}

/// Convert a DynamoDB item to Book.
///
/// Legacy items that store the title under `name` are read as well.
pub fn item_to_book(item: &HashMap<String, AttributeValue>) -> Result<Book, RepositoryError> {
    Ok(Book {
        id: get_string(item, ID)?,
        title: get_optional_string(item, TITLE)?.or(get_optional_string(item, "name")?),
        completed: get_optional_bool(item, COMPLETED)?,
        rating: get_optional_i32(item, RATING)?,
        reviews: get_optional_string_list(item, REVIEWS)?,
    })
}

/// Convert an update value to its attribute representation.
pub fn field_value_to_attribute(value: &FieldValue) -> AttributeValue {
    match value {
        FieldValue::Text(s) => AttributeValue::S(s.clone()),
        FieldValue::Int(n) => AttributeValue::N(n.to_string()),
        FieldValue::Bool(b) => AttributeValue::Bool(*b),
        FieldValue::Null => AttributeValue::Null(true),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute. A present attribute of another type is an error.
fn get_optional_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid_type(key, "string")),
    }
}

/// Get an optional boolean attribute.
fn get_optional_bool(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<bool>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid_type(key, "boolean")),
    }
}

/// Get an optional integer attribute.
fn get_optional_i32(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<i32>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::N(n)) => n
            .parse()
            .map(Some)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e))),
        Some(_) => Err(invalid_type(key, "number")),
    }
}

/// Get an optional list of strings, stored either as a list or a string set.
fn get_optional_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<Vec<String>>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::Ss(values)) => Ok(Some(values.clone())),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| {
                v.as_s()
                    .map(|s| s.to_string())
                    .map_err(|_| invalid_type(key, "list of strings"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(invalid_type(key, "list of strings")),
    }
}

fn invalid_type(key: &str, expected: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!("Field {} is not a {}", key, expected))
}
