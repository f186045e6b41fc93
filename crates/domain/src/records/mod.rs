/// Signing record model
pub mod record;

/// Inclusive date-range filter
pub mod filter;

/// CSV export
pub mod export;

pub use export::{attachment_filename, export_csv, Quoting, CSV_HEADER};
pub use filter::DateRange;
pub use record::{DrugLine, RecordRow, SigningRecord};
