//! # Document Store Collaborator
//!
//! The calculation history lives in an external document store reachable
//! via a connection string. This module is the seam: a narrow async trait
//! covering exactly the operations the service needs, the record type,
//! the store fault taxonomy, and the built-in `memory://` backend.
//!
//! The store is the sole arbiter of per-record consistency: updates and
//! deletes racing on the same id resolve last-write-wins, and no
//! optimistic concurrency token exists.

pub mod errors;
pub mod memory;
pub mod record;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::{CalculationDraft, CalculationRecord};

/// Store connectivity as seen by the health report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

/// Active/available connection counts reported by the store
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionCounts {
    pub current: u64,
    pub available: u64,
}

/// Per-operation counters reported by the store
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpCounters {
    pub insert: u64,
    pub query: u64,
    pub update: u64,
    pub delete: u64,
}

/// Server statistics returned by [`DocumentStore::server_status`]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServerStatus {
    /// Store uptime in seconds
    pub uptime: u64,
    pub connections: ConnectionCounts,
    pub opcounters: OpCounters,
}

/// The document-store operations the calculation service relies on.
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new record; the store assigns id and timestamp.
    async fn insert(&self, draft: CalculationDraft) -> StoreResult<CalculationRecord>;

    /// All records, most-recently-created first.
    async fn find_all(&self) -> StoreResult<Vec<CalculationRecord>>;

    /// One record by id.
    async fn find_by_id(&self, id: &str) -> StoreResult<CalculationRecord>;

    /// Replace operation/number1/number2/result on an existing record.
    /// `timestamp` is never touched and `result` is never recomputed.
    async fn update_by_id(
        &self,
        id: &str,
        fields: CalculationDraft,
    ) -> StoreResult<CalculationRecord>;

    /// Remove a record, returning it.
    async fn delete_by_id(&self, id: &str) -> StoreResult<CalculationRecord>;

    /// Store-reported statistics for the health report.
    async fn server_status(&self) -> StoreResult<ServerStatus>;

    /// Current connectivity state.
    fn state(&self) -> ConnectionState;
}

/// Open a store from its connection string.
///
/// The scheme selects the backend; `memory://` is the only one built in.
pub fn connect(url: &str) -> StoreResult<Arc<dyn DocumentStore>> {
    match url.split_once("://") {
        Some(("memory", _)) => Ok(Arc::new(MemoryStore::new())),
        _ => Err(StoreError::UnsupportedScheme(url.to_string())),
    }
}
