//! Storage backend implementations.
//!
//! Concrete implementations of `bookshelf_core::storage::BookRepository`:
//!
//! - [`DynamoDbRepository`]: the books table, through `aws-sdk-dynamodb`
//! - [`InMemoryRepository`]: process-local maps, for tests and local runs

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
