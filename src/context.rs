//! # Application Context
//!
//! The explicitly constructed context object holding the logger handle,
//! the store handle, and the process start instant. Built once at startup
//! and passed to the API layer; there are no ambient globals.

use std::sync::Arc;
use std::time::Instant;

use crate::observability::Logger;
use crate::store::DocumentStore;

/// Process-lifetime context shared by the API layer
#[derive(Clone)]
pub struct AppContext {
    pub logger: Logger,
    pub store: Arc<dyn DocumentStore>,
    /// Process start, for uptime in the health report
    pub started: Instant,
}

impl AppContext {
    pub fn new(logger: Logger, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            logger,
            store,
            started: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_context_is_cloneable_and_shares_store() {
        let ctx = AppContext::new(Logger::new("calcd-test"), Arc::new(MemoryStore::new()));
        let clone = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.store, &clone.store));
    }
}
