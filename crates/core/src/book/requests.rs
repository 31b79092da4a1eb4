//! Input types for book mutations.

use serde::{Deserialize, Deserializer, Serialize};

use super::patch::{BookField, FieldValue};
use super::types::Book;

/// Input of the `updateBook` mutation.
///
/// Only `id` is required. Each optional attribute has three states:
/// - `None`: the key is absent and the attribute is not touched
/// - `Some(None)`: the key is `null` and the attribute is cleared
/// - `Some(Some(v))`: the attribute is set to `v`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UpdateBookPayload")]
pub struct UpdateBookInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<Option<bool>>,
}

/// Wire form of [`UpdateBookInput`]. `title` wins over the legacy `name`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBookPayload {
    id: String,
    #[serde(default, deserialize_with = "deserialize_present")]
    title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    rating: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    completed: Option<Option<bool>>,
}

impl From<UpdateBookPayload> for UpdateBookInput {
    fn from(payload: UpdateBookPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title.or(payload.name),
            rating: payload.rating,
            completed: payload.completed,
        }
    }
}

/// Marks a present key as `Some`, so an explicit `null` becomes `Some(None)`.
/// Absent keys fall back to `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateBookInput {
    /// Creates an update that changes nothing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the new title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    /// Sets the new rating.
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(Some(rating));
        self
    }

    /// Sets the new completed flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(Some(completed));
        self
    }

    /// Clears `field`, as an explicit `null` in the request does.
    pub fn clearing(mut self, field: BookField) -> Self {
        match field {
            BookField::Title => self.title = Some(None),
            BookField::Rating => self.rating = Some(None),
            BookField::Completed => self.completed = Some(None),
        }
        self
    }

    /// Returns the attributes this update writes, in [`BookField::ALL`] order.
    /// A cleared attribute is written as [`FieldValue::Null`].
    pub fn changes(&self) -> Vec<(BookField, FieldValue)> {
        BookField::ALL
            .into_iter()
            .filter_map(|field| self.value_of(field).map(|value| (field, value)))
            .collect()
    }

    /// Returns true if at least one optional attribute is set or cleared.
    pub fn has_changes(&self) -> bool {
        BookField::ALL
            .into_iter()
            .any(|field| self.value_of(field).is_some())
    }

    /// Applies the present attributes to `book`, leaving every other attribute as is.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(completed) = self.completed {
            book.completed = completed;
        }
    }

    fn value_of(&self, field: BookField) -> Option<FieldValue> {
        match field {
            BookField::Title => self
                .title
                .as_ref()
                .map(|v| v.clone().map_or(FieldValue::Null, FieldValue::Text)),
            BookField::Rating => self.rating.map(|v| v.map_or(FieldValue::Null, FieldValue::Int)),
            BookField::Completed => self
                .completed
                .map(|v| v.map_or(FieldValue::Null, FieldValue::Bool)),
        }
    }
}
