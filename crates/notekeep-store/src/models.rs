//! Database models for the storage layer.
//!
//! Row types map directly to database rows for sqlx queries. They are
//! separate from the domain types in notekeep-core: rows carry raw UUIDs,
//! and conversion into the typed identifiers happens at the crate boundary.

use chrono::{DateTime, Utc};
use notekeep_core::{Note, NoteId, User, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Input for creating a new user.
///
/// `password_hash` is the already-hashed password; the storage layer never
/// sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: UserId,
    pub text: String,
    pub content: Option<String>,
}

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            text: row.text,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
