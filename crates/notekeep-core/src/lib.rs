//! notekeep-core: domain types for the notekeep notes service
//!
//! This crate defines the fundamental types shared by the storage layer and
//! the HTTP server:
//!
//! - Typed identifiers (`UserId`, `NoteId`) wrapping UUIDs
//! - `User` — an account with a hashed password, created on signup
//! - `Note` — a short text record owned by exactly one user
//!
//! The types carry no behavior beyond construction, display, and parsing;
//! all persistence and authorization logic lives in the dependent crates.

pub mod types;

pub use types::{Note, NoteId, User, UserId};
