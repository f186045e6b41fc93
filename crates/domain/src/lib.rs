//! Drug Receipt Domain Models

/// Signing records, range filter and CSV export
pub mod records;

/// Catalog lookup and row projection
pub mod catalog;

/// Record persistence
pub mod store;

/// Google Sheets REST client
pub mod sheets;

/// Lenient cell text
pub(crate) mod text;

/// ISO calendar dates accepted at the input boundary
pub mod dates;

/// Domain errors
pub mod errors;

pub use dates::IsoDate;
pub use errors::{Error, Result};
