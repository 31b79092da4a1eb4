//! GraphQL resolver functions for a books table.
//!
//! Each schema field (`listBooks`, `getBookById`, `createBook`, `updateBook`)
//! is resolved by one handler issuing a single request against the table
//! named by `BOOKS_TABLE`. [`dispatch::dispatch`] is the entrypoint used by the
//! Lambda binary and by `bookshelf-invoke`.

pub mod config;
pub mod dispatch;
pub mod event;
pub mod handlers;
pub mod state;
pub mod storage;

pub use config::Config;
pub use dispatch::dispatch;
pub use event::ResolverEvent;
pub use state::AppState;
