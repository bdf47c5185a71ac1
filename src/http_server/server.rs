//! # HTTP Server
//!
//! Main HTTP server combining the calculation and health routers.
//!
//! The server is handed the application context at construction; handlers
//! reach the logger and store handles through it rather than through any
//! process-wide global.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::context::AppContext;

use super::calculation_routes::{calculation_routes, CalculationState};
use super::config::HttpServerConfig;
use super::health_routes::{health_routes, HealthState};

/// HTTP server for the calculation API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, ctx: AppContext) -> Self {
        let router = Self::build_router(&config, ctx);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, ctx: AppContext) -> Router {
        let calculation_state = Arc::new(CalculationState::from_context(&ctx));
        let health_state = Arc::new(HealthState::from_context(&ctx));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, the frontend may be
            // served from anywhere
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes(health_state))
            // Operation + history endpoints at root level
            .merge(calculation_routes(calculation_state))
            // Apply CORS middleware
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        println!("Server is running on port {}", addr.port());

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
