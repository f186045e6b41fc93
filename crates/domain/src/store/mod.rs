use async_trait::async_trait;

use crate::errors::Result;
use crate::records::SigningRecord;

/// JSON file store
pub mod file;

/// In-memory store
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Append-only collection of signing records.
///
/// Implementations do not serialise concurrent appends; two requests racing
/// on the same backing store may lose one of the writes.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, record: &SigningRecord) -> Result<()>;

    /// Every stored record in insertion order. An empty or missing backing
    /// store yields an empty list.
    async fn read_all(&self) -> Result<Vec<SigningRecord>>;
}

/// Secondary copy of each stored record, e.g. a shared spreadsheet.
#[async_trait]
pub trait RecordMirror: Send + Sync {
    async fn mirror(&self, record: &SigningRecord) -> Result<()>;
}
