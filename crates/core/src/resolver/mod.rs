//! Resolver metadata and the handler error taxonomy.

mod error;
mod field;

pub use error::ResolverError;
pub use field::{ParentType, ResolverField, TableAccess};
