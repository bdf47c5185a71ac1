//! # calcd HTTP Server Module
//!
//! The API layer: an Axum server wiring validation, arithmetic dispatch
//! and the record service behind the operation endpoints, CRUD access to
//! the calculation history, and the aggregated health report.
//!
//! # Endpoints
//!
//! - `POST /add` `/subtract` `/multiply` `/divide` `/exponentiation`
//!   `/modulo` `/square-root` - arithmetic operations
//! - `GET|PUT|DELETE /calculations[/:id]` - calculation history CRUD
//! - `GET /health` - process + store health report

pub mod calculation_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
