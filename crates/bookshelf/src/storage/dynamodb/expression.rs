//! Update expression builder.
//!
//! Turns a set of `(attribute, value)` assignments into a DynamoDB `SET`
//! expression. Attribute names and values only ever appear in the expression
//! as placeholders (`#f0`, `:v0`), so reserved words and user data never have
//! to be escaped.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bookshelf_core::book::{BookField, FieldValue};

use super::conversions::field_value_to_attribute;

/// A `SET` update expression with its placeholder maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateExpression {
    assignments: Vec<String>,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    /// Creates an expression with no assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the expression for the changed fields of a book update.
    pub fn from_changes(changes: &[(BookField, FieldValue)]) -> Self {
        changes
            .iter()
            .fold(Self::new(), |expression, (field, value)| {
                expression.set(field.attribute_name(), field_value_to_attribute(value))
            })
    }

    /// Adds `attribute = value` to the expression.
    pub fn set(mut self, attribute: &str, value: AttributeValue) -> Self {
        let index = self.assignments.len();
        let name = format!("#f{index}");
        let placeholder = format!(":v{index}");

        self.assignments.push(format!("{name} = {placeholder}"));
        self.names.insert(name, attribute.to_string());
        self.values.insert(placeholder, value);
        self
    }

    /// Returns true if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The `UpdateExpression` string, or `None` when there is nothing to set.
    pub fn expression(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("SET {}", self.assignments.join(", ")))
    }

    /// Placeholder to attribute name map (`ExpressionAttributeNames`).
    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    /// Placeholder to value map (`ExpressionAttributeValues`).
    pub fn values(&self) -> &HashMap<String, AttributeValue> {
        &self.values
    }
}
