//! Attribute-level description of a partial book update.
//!
//! A store adapter receives the `(BookField, FieldValue)` pairs produced by
//! [`UpdateBookInput::changes`](super::UpdateBookInput::changes) and turns them
//! into its native update syntax. Fields missing from the input never show up
//! here, so they are never written. A field sent as `null` shows up as
//! [`FieldValue::Null`].

use std::fmt;

/// A book attribute that can be changed by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Rating,
    Completed,
}

impl BookField {
    /// All updatable fields, in the order they are applied.
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Rating, BookField::Completed];

    /// Name of the attribute as stored in the table.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Rating => "rating",
            BookField::Completed => "completed",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_name())
    }
}

/// The new value of a changed attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Bool(bool),
    /// The attribute is written as null.
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names() {
        let names: Vec<&str> = BookField::ALL.iter().map(|f| f.attribute_name()).collect();
        assert_eq!(names, vec!["title", "rating", "completed"]);
    }

    #[test]
    fn test_display_uses_attribute_name() {
        assert_eq!(BookField::Completed.to_string(), "completed");
    }
}
