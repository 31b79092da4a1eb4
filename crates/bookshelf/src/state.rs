//! Shared resolver state.
//!
//! Created once per process and borrowed by every invocation. The repository
//! is the only object reused across invocations.

use std::sync::Arc;

use bookshelf_core::storage::BookRepository;

use crate::config::Config;

/// State passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Book repository (DynamoDB in Lambda, in-memory in tests).
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    /// Creates the state from a configuration and a repository.
    pub fn new(config: Config, books: Arc<dyn BookRepository>) -> Self {
        Self {
            config: Arc::new(config),
            books,
        }
    }
}
