//! # In-Memory Store Backend
//!
//! The `memory://` backend: records in an interior-mutability `Vec` with
//! UUID ids, creation timestamps, and atomic op counters feeding
//! [`ServerStatus`](super::ServerStatus). Insertion order is creation
//! order, so listings return the vector reversed.
//!
//! Connectivity can be toggled off for fault injection in tests; a
//! disconnected store fails every operation with
//! [`StoreError::Unavailable`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::record::{CalculationDraft, CalculationRecord};
use super::{ConnectionCounts, ConnectionState, DocumentStore, OpCounters, ServerStatus};

/// In-memory document store
pub struct MemoryStore {
    records: RwLock<Vec<CalculationRecord>>,
    started: Instant,
    connected: AtomicBool,
    inserts: AtomicU64,
    queries: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            started: Instant::now(),
            connected: AtomicBool::new(true),
            inserts: AtomicU64::new(0),
            queries: AtomicU64::new(0),
            updates: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
        }
    }

    /// Toggle connectivity (fault injection for tests).
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    fn ensure_connected(&self) -> StoreResult<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("store is disconnected".to_string()))
        }
    }

    /// Reject ids that do not have the store's id shape (UUID).
    fn check_id(id: &str) -> StoreResult<()> {
        Uuid::parse_str(id)
            .map(|_| ())
            .map_err(|_| StoreError::MalformedId(id.to_string()))
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Unavailable("record lock poisoned".to_string())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, draft: CalculationDraft) -> StoreResult<CalculationRecord> {
        self.ensure_connected()?;
        self.inserts.fetch_add(1, Ordering::Relaxed);

        let record = CalculationRecord {
            id: Uuid::new_v4().to_string(),
            operation: draft.operation,
            number1: draft.number1,
            number2: draft.number2,
            result: draft.result,
            timestamp: Utc::now(),
        };

        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        records.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> StoreResult<Vec<CalculationRecord>> {
        self.ensure_connected()?;
        self.queries.fetch_add(1, Ordering::Relaxed);

        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        // Insertion order is creation order; newest first
        Ok(records.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<CalculationRecord> {
        self.ensure_connected()?;
        Self::check_id(id)?;
        self.queries.fetch_add(1, Ordering::Relaxed);

        let records = self.records.read().map_err(|_| Self::lock_poisoned())?;
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: CalculationDraft,
    ) -> StoreResult<CalculationRecord> {
        self.ensure_connected()?;
        Self::check_id(id)?;
        self.updates.fetch_add(1, Ordering::Relaxed);

        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;

        // Full replace of the mutable fields; id and timestamp stay
        record.operation = fields.operation;
        record.number1 = fields.number1;
        record.number2 = fields.number2;
        record.result = fields.result;
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<CalculationRecord> {
        self.ensure_connected()?;
        Self::check_id(id)?;
        self.deletes.fetch_add(1, Ordering::Relaxed);

        let mut records = self.records.write().map_err(|_| Self::lock_poisoned())?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(records.remove(index))
    }

    async fn server_status(&self) -> StoreResult<ServerStatus> {
        self.ensure_connected()?;

        Ok(ServerStatus {
            uptime: self.started.elapsed().as_secs(),
            connections: ConnectionCounts {
                current: 1,
                available: 0,
            },
            opcounters: OpCounters {
                insert: self.inserts.load(Ordering::Relaxed),
                query: self.queries.load(Ordering::Relaxed),
                update: self.updates.load(Ordering::Relaxed),
                delete: self.deletes.load(Ordering::Relaxed),
            },
        })
    }

    fn state(&self) -> ConnectionState {
        if self.connected.load(Ordering::SeqCst) {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}
