//! AppSync direct Lambda resolver payloads.
//!
//! AppSync sends one event per resolved field. Only `arguments` and `info` are
//! read; the remaining context is kept so it shows up in debug logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use bookshelf_core::book::{Book, UpdateBookInput};

/// The event AppSync passes to a direct Lambda resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverEvent {
    /// Field arguments, as sent by the client.
    #[serde(default)]
    pub arguments: Value,
    pub info: ResolverInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stash: Option<Value>,
}

/// Which field of which type is being resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverInfo {
    pub parent_type_name: String,
    pub field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection_set_list: Vec<String>,
}

impl ResolverEvent {
    /// Builds an event for `parent_type_name.field_name` with the given arguments.
    pub fn new(
        parent_type_name: impl Into<String>,
        field_name: impl Into<String>,
        arguments: Value,
    ) -> Self {
        Self {
            arguments,
            info: ResolverInfo {
                parent_type_name: parent_type_name.into(),
                field_name: field_name.into(),
                ..ResolverInfo::default()
            },
            ..Self::default()
        }
    }
}

/// Arguments of `Query.getBookById`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBookByIdArgs {
    pub book_id: String,
}

/// Arguments of `Mutation.createBook`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookArgs {
    pub book: Book,
}

/// Arguments of `Mutation.updateBook`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookArgs {
    pub book: UpdateBookInput,
}
