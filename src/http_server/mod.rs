//! # PromoSuite HTTP Server Module
//!
//! Axum API server for the PromoSuite editor.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check (no auth)
//! - `POST /api/beautify` - Portrait beautification
//! - `POST /api/optimize-layout` - Flyer layout optimization
//! - `POST /api/inpaint` - Object removal
//! - `GET /api/credits` - Credit balance
//! - `GET /api/stats` - Usage statistics
//!
//! Everything under `/api` requires `Authorization: Bearer <token>`.

pub mod account_routes;
pub mod ai_routes;
pub mod auth;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;
pub mod state;

pub use auth::{authenticate, DemoUser};
pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use state::ServiceState;
