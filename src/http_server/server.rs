//! HTTP server assembly
//!
//! Combines the grid and health routers behind the configured CORS policy
//! and binds the listener.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::routes::{grid_routes, health_routes, GridState};

/// HTTP server for the grid API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server with the default configuration
    pub fn new(state: GridState) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Creates a server with a custom configuration
    pub fn with_config(config: HttpServerConfig, state: GridState) -> Self {
        let router = Self::build_router(&config, Arc::new(state));
        Self { config, router }
    }

    /// Builds the combined router
    fn build_router(config: &HttpServerConfig, state: Arc<GridState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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
            .merge(health_routes())
            .nest("/api", grid_routes(state))
            .layer(cors)
    }

    /// Returns the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Returns the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info("HTTP_SERVER_STARTED", &[("addr", addr.as_str())]);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MAX_PAGE_LENGTH;
    use crate::people;

    fn test_state() -> GridState {
        GridState::new(people::sample_people(), MAX_PAGE_LENGTH)
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_state());
        let _router = server.router();
    }

    #[test]
    fn test_server_uses_config_addr() {
        let server = HttpServer::with_config(HttpServerConfig::with_port(9999), test_state());
        assert_eq!(server.socket_addr(), "0.0.0.0:9999");
    }
}
