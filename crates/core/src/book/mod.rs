mod error;
mod operations;
mod patch;
mod requests;
mod types;

pub use error::BookError;
pub use operations::{validate_book, validate_book_id};
pub use patch::{BookField, FieldValue};
pub use requests::UpdateBookInput;
pub use types::Book;
