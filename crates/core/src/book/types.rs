use serde::{Deserialize, Serialize};

/// A book stored in the books table.
///
/// `id` is the partition key and is supplied by the caller. Every other
/// attribute is optional and omitted from the stored item when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookPayload")]
pub struct Book {
    pub id: String,
    /// Display title. Early payloads call this attribute `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<String>>,
}

/// Wire form of [`Book`]. `title` wins over the legacy `name`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookPayload {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    completed: Option<bool>,
    #[serde(default)]
    rating: Option<i32>,
    #[serde(default)]
    reviews: Option<Vec<String>>,
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title.or(payload.name),
            completed: payload.completed,
            rating: payload.rating,
            reviews: payload.reviews,
        }
    }
}

impl Book {
    /// Creates a book with only its id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the completed flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the reviews.
    pub fn with_reviews<I, S>(mut self, reviews: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviews = Some(reviews.into_iter().map(Into::into).collect());
        self
    }
}
