//! # Record Service
//!
//! Persists and retrieves calculation records through the document-store
//! seam. Creation after a successful arithmetic evaluation is best-effort:
//! a persistence failure is logged and swallowed because the computed
//! result, not durability, is the primary deliverable of an operation
//! request. Reads, updates and deletes propagate store faults to the
//! caller.

use std::sync::Arc;

use crate::observability::Logger;
use crate::store::{CalculationDraft, CalculationRecord, DocumentStore, StoreResult};

/// Service over the document store holding calculation records
#[derive(Clone)]
pub struct CalculationService {
    store: Arc<dyn DocumentStore>,
    logger: Logger,
}

impl CalculationService {
    pub fn new(store: Arc<dyn DocumentStore>, logger: Logger) -> Self {
        Self { store, logger }
    }

    /// Best-effort create: persist the completed calculation if the store
    /// allows it. Returns the stored record when persistence succeeded.
    pub async fn record(&self, draft: CalculationDraft) -> Option<CalculationRecord> {
        match self.store.insert(draft).await {
            Ok(record) => {
                self.logger
                    .trace("calculation_saved", &[("id", &record.id)]);
                Some(record)
            }
            Err(err) => {
                self.logger
                    .error("calculation_save_failed", &[("error", &err.to_string())]);
                None
            }
        }
    }

    /// All records, most-recently-created first.
    pub async fn list_all(&self) -> StoreResult<Vec<CalculationRecord>> {
        self.store.find_all().await
    }

    /// One record by id.
    pub async fn get(&self, id: &str) -> StoreResult<CalculationRecord> {
        self.store.find_by_id(id).await
    }

    /// Replace operation/number1/number2/result on an existing record.
    /// The stored `result` is whatever the caller submitted; it is not
    /// recomputed against the operands.
    pub async fn update(
        &self,
        id: &str,
        fields: CalculationDraft,
    ) -> StoreResult<CalculationRecord> {
        self.store.update_by_id(id, fields).await
    }

    /// Remove a record by id.
    pub async fn delete(&self, id: &str) -> StoreResult<CalculationRecord> {
        self.store.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operation;
    use crate::store::{MemoryStore, StoreError};

    fn service_over(store: Arc<MemoryStore>) -> CalculationService {
        CalculationService::new(store, Logger::new("calcd-test"))
    }

    fn draft() -> CalculationDraft {
        CalculationDraft::new(Operation::Add, 2.0, Some(3.0), 5.0)
    }

    #[tokio::test]
    async fn test_record_returns_stored_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(store);

        let stored = service.record(draft()).await.expect("persisted");
        assert_eq!(stored.result, 5.0);

        let listed = service.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, stored.id);
    }

    #[tokio::test]
    async fn test_record_swallows_store_failure() {
        let store = Arc::new(MemoryStore::new());
        store.set_connected(false);
        let service = service_over(store);

        // No error escapes; the caller just gets no stored record.
        assert!(service.record(draft()).await.is_none());
    }

    #[tokio::test]
    async fn test_reads_propagate_faults() {
        let store = Arc::new(MemoryStore::new());
        store.set_connected(false);
        let service = service_over(store);

        assert!(matches!(
            service.list_all().await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
