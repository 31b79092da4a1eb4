//! One handler per schema field.
//!
//! Every handler checks the table configuration before touching the store and
//! issues at most one repository call. Failures are returned as
//! [`ResolverError`](bookshelf_core::resolver::ResolverError); turning them
//! into `null` is the dispatcher's job.

mod create_book;
mod get_book_by_id;
mod list_books;
mod update_book;

pub use create_book::create_book;
pub use get_book_by_id::get_book_by_id;
pub use list_books::list_books;
pub use update_book::update_book;
