//! # HTTP Server
//!
//! Combines the health, AI and account routers behind one CORS layer and
//! one request body limit.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::account_routes::account_routes;
use super::ai_routes::ai_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::state::ServiceState;
use crate::observability::{log_event_with_fields, Event};

/// HTTP server for the PromoSuite AI backend
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let origin = if config.cors_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    fn build_router(config: &HttpServerConfig) -> Router {
        let state = Arc::new(ServiceState::from_config(config));

        Router::new()
            .merge(health_routes())
            .nest("/api", ai_routes(state.clone()).merge(account_routes(state)))
            .layer(DefaultBodyLimit::max(config.max_body_bytes))
            .layer(Self::cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let addr_str = addr.to_string();
        log_event_with_fields(Event::ServerStart, &[("addr", addr_str.as_str())]);

        axum::serve(listener, self.router).await
    }
}
