//! In-memory storage backend.
//!
//! Stores books in HashMaps wrapped in `Arc<RwLock<_>>`, one map per table
//! name. Used as the test double for the handlers and as the default store of
//! `bookshelf-invoke`.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! assert_eq!(repo.calls(), 0);
//! ```

mod repository;

pub use repository::InMemoryRepository;
