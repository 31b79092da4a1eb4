//! DynamoDB storage backend implementation.
//!
//! Items are addressed by a single string partition key, `id`. Book attributes
//! are stored under their GraphQL names.

mod conversions;
mod error;
mod expression;
mod repository;

pub use expression::UpdateExpression;
pub use repository::DynamoDbRepository;
