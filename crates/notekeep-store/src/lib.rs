//! notekeep-store: storage layer for the notekeep notes service
//!
//! This crate provides:
//! - The [`Backend`] trait — the store contract the HTTP server codes against
//! - [`PgStore`] — PostgreSQL persistence via sqlx with embedded migrations
//! - [`MemoryStore`] — an in-memory backend for tests and development
//!
//! # Architecture
//!
//! Handlers never touch a connection pool directly; they hold an
//! `Arc<dyn Backend>` injected at startup. That keeps the request path
//! testable without a live database — swap in a `MemoryStore` and the same
//! handler code runs unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notekeep_store::{PgStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = PgStore::connect(config).await?;
//!
//! let user = store.find_user_by_email("a@x.com").await?;
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod schema;

pub use backend::Backend;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{NewNote, NewUser};
pub use postgres::{PgStore, StoreConfig};

// Re-export notekeep-core for downstream crates
pub use notekeep_core;
