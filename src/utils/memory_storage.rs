//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::traits::*;
use crate::types::*;

type Records = HashMap<String, InvoiceRecord>;

/// In-memory invoice record storage for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<RwLock<Records>>,
}

fn poisoned<T>(_: PoisonError<T>) -> InvoiceError {
    InvoiceError::Storage("record store lock poisoned".to_string())
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, e.g. a previously exported list
    pub fn with_records(records: impl IntoIterator<Item = InvoiceRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Number of stored records; still counted after a writer panicked
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> InvoiceResult<()> {
        self.records.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for MemoryStorage {
    async fn save_record(&mut self, record: &InvoiceRecord) -> InvoiceResult<()> {
        self.records
            .write()
            .map_err(poisoned)?
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_record(&self, record_id: &str) -> InvoiceResult<Option<InvoiceRecord>> {
        Ok(self.records.read().map_err(poisoned)?.get(record_id).cloned())
    }

    async fn list_records(
        &self,
        status: Option<InvoiceStatus>,
    ) -> InvoiceResult<Vec<InvoiceRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        let filtered: Vec<InvoiceRecord> = records
            .values()
            .filter(|record| status.is_none_or(|s| record.status == s))
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn update_record(&mut self, record: &InvoiceRecord) -> InvoiceResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        match records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(InvoiceError::NotFound(record.id.clone())),
        }
    }

    async fn delete_record(&mut self, record_id: &str) -> InvoiceResult<()> {
        if self
            .records
            .write()
            .map_err(poisoned)?
            .remove(record_id)
            .is_some()
        {
            Ok(())
        } else {
            Err(InvoiceError::NotFound(record_id.to_string()))
        }
    }
}
