//! Core types and traits for the bookshelf resolvers.
//!
//! Everything here is pure: domain types, the partial-update fold, the
//! repository trait and the error taxonomy. Storage backends and the Lambda
//! entrypoint live in the `bookshelf` crate.

pub mod book;
pub mod resolver;
pub mod storage;
