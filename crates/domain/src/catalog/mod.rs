/// Catalog entry returned for a date
pub mod entry;

/// Header/row projection
pub mod projection;

/// Tabular sources and date lookup
pub mod source;

pub use entry::{CatalogEntry, DrugItem};
pub use projection::{find_entry, ColumnLayout};
pub use source::{Catalog, SheetRows, SheetSource, StaticSheet};
