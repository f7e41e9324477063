//! HTTP server for gridserve
//!
//! Axum-based server exposing the grid endpoint and a health check.

mod config;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use routes::{grid_routes, health_routes, page_response, GridState};
pub use server::HttpServer;
