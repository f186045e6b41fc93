use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::records::SigningRecord;

use super::RecordStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<SigningRecord>>,
}

impl InMemoryStore {
    pub fn new(records: Vec<SigningRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn append(&self, record: &SigningRecord) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SigningRecord>> {
        Ok(self.records.lock().await.clone())
    }
}
