//! Health HTTP Routes
//!
//! The aggregated health report: process uptime and memory usage plus
//! store connectivity and store-reported server statistics. The report is
//! 200 `status: "OK"` whenever the stats query succeeds; a failing stats
//! query (store unreachable) is a 500 `status: "ERROR"` carrying the
//! underlying fault message.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessesToUpdate, System};

use crate::context::AppContext;
use crate::store::{ConnectionCounts, DocumentStore, OpCounters};

// ==================
// Shared State
// ==================

/// Health state shared across handlers
pub struct HealthState {
    pub store: Arc<dyn DocumentStore>,
    pub started: Instant,
}

impl HealthState {
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            store: ctx.store.clone(),
            started: ctx.started,
        }
    }
}

// ==================
// Response Types
// ==================

/// Successful health report
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// Process uptime in seconds
    pub uptime: f64,
    #[serde(rename = "memoryUsage")]
    pub memory_usage: MemoryUsage,
    /// Store block; the wire key is historical and clients read it as-is
    pub mongo: StoreHealth,
}

/// Process memory usage in bytes
#[derive(Debug, Default, Serialize)]
pub struct MemoryUsage {
    pub rss: u64,
    #[serde(rename = "virtual")]
    pub virtual_memory: u64,
}

/// Store connectivity and server statistics
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub state: &'static str,
    pub uptime: u64,
    pub connections: ConnectionCounts,
    pub opcounters: OpCounters,
}

/// Failing health report
#[derive(Debug, Serialize)]
pub struct HealthError {
    pub status: &'static str,
    pub message: &'static str,
    pub error: String,
}

// ==================
// Routes
// ==================

/// Create the health routes
pub fn health_routes(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<HealthState>>) -> Response {
    match state.store.server_status().await {
        Ok(stats) => {
            let report = HealthReport {
                status: "OK",
                uptime: state.started.elapsed().as_secs_f64(),
                memory_usage: process_memory(),
                mongo: StoreHealth {
                    state: state.store.state().as_str(),
                    uptime: stats.uptime,
                    connections: stats.connections,
                    opcounters: stats.opcounters,
                },
            };
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            let body = HealthError {
                status: "ERROR",
                message: "Store health check failed",
                error: err.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Resident/virtual memory of this process; zeros when the platform query
/// fails.
fn process_memory() -> MemoryUsage {
    let Ok(pid) = get_current_pid() else {
        return MemoryUsage::default();
    };

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    match system.process(pid) {
        Some(process) => MemoryUsage {
            rss: process.memory(),
            virtual_memory: process.virtual_memory(),
        },
        None => MemoryUsage::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_memory_reports_this_process() {
        let usage = process_memory();
        // The running test process has a nonzero resident set
        assert!(usage.rss > 0);
    }

    #[test]
    fn test_health_report_wire_keys() {
        let report = HealthReport {
            status: "OK",
            uptime: 1.5,
            memory_usage: MemoryUsage::default(),
            mongo: StoreHealth {
                state: "connected",
                uptime: 10,
                connections: ConnectionCounts {
                    current: 1,
                    available: 0,
                },
                opcounters: OpCounters {
                    insert: 0,
                    query: 0,
                    update: 0,
                    delete: 0,
                },
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "OK");
        assert!(value["memoryUsage"]["rss"].is_u64());
        assert_eq!(value["mongo"]["state"], "connected");
    }
}
