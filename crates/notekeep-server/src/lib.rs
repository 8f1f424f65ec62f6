//! notekeep-server: HTTP API server for the notekeep notes service
//!
//! This crate provides:
//! - Account endpoints (signup, login, session check, logout)
//! - Per-user note CRUD behind a cookie-based auth gate
//! - JWT issuance/verification and Argon2 password hashing
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers compose three pieces: the token
//! service in [`auth`], the auth gate ([`auth::AuthUser`] extractor), and
//! the store contract from notekeep-store. The middleware stack adds
//! request tracing and CORS handling; errors leave every handler as an
//! [`ApiError`] rendered to a JSON envelope.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notekeep_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notekeep_core;
pub use notekeep_store;
