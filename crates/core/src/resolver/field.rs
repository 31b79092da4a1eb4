//! The schema fields backed by a resolver function.
//!
//! Each field is bound to exactly one data source. The metadata here is what
//! a deployment needs to wire the binding: the `(parent type, field)` pair, the
//! data source name and the least table access the handler requires.

use std::fmt;
use std::str::FromStr;

use super::ResolverError;

/// Root operation type that owns a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentType {
    Query,
    Mutation,
}

impl ParentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentType::Query => "Query",
            ParentType::Mutation => "Mutation",
        }
    }
}

/// Table permission granted to a resolver function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableAccess {
    ReadOnly,
    ReadWrite,
}

/// A schema field resolved by one of the book handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverField {
    ListBooks,
    GetBookById,
    CreateBook,
    UpdateBook,
}

impl ResolverField {
    pub const ALL: [ResolverField; 4] = [
        ResolverField::ListBooks,
        ResolverField::GetBookById,
        ResolverField::CreateBook,
        ResolverField::UpdateBook,
    ];

    pub fn parent_type(&self) -> ParentType {
        match self {
            ResolverField::ListBooks | ResolverField::GetBookById => ParentType::Query,
            ResolverField::CreateBook | ResolverField::UpdateBook => ParentType::Mutation,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            ResolverField::ListBooks => "listBooks",
            ResolverField::GetBookById => "getBookById",
            ResolverField::CreateBook => "createBook",
            ResolverField::UpdateBook => "updateBook",
        }
    }

    /// Name of the data source the field is attached to.
    pub fn data_source_name(&self) -> &'static str {
        match self {
            ResolverField::ListBooks => "listBookDataSource",
            ResolverField::GetBookById => "getBookByIdDataSource",
            ResolverField::CreateBook => "createBookDataSource",
            ResolverField::UpdateBook => "updateBookDataSource",
        }
    }

    /// Queries only read the table; mutations read and write it.
    pub fn table_access(&self) -> TableAccess {
        match self.parent_type() {
            ParentType::Query => TableAccess::ReadOnly,
            ParentType::Mutation => TableAccess::ReadWrite,
        }
    }

    /// Looks up the field for a `(parentTypeName, fieldName)` pair.
    pub fn from_names(parent_type_name: &str, field_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field.parent_type().as_str() == parent_type_name && field.field_name() == field_name
        })
    }
}

impl fmt::Display for ResolverField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parent_type().as_str(), self.field_name())
    }
}

/// Parses the `Type.field` form produced by [`Display`](fmt::Display).
impl FromStr for ResolverField {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('.')
            .and_then(|(parent, field)| Self::from_names(parent.trim(), field.trim()))
            .ok_or_else(|| ResolverError::UnexpectedField(s.to_string()))
    }
}
