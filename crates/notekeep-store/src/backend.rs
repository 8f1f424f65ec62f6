//! The store contract the HTTP server codes against.

use async_trait::async_trait;
use notekeep_core::{Note, NoteId, User, UserId};

use crate::error::StoreResult;
use crate::models::{NewNote, NewUser};

/// Store contract: credential records plus per-user note records.
///
/// Exactly the operations the request handlers need, nothing more. Both
/// [`PgStore`](crate::PgStore) and [`MemoryStore`](crate::MemoryStore)
/// implement it, so the server can run against PostgreSQL in production and
/// entirely in memory under test.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Persist a new user. Fails with `DuplicateEmail` if the email is taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    /// Look up a user by email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Persist a new note owned by `note.user_id`.
    async fn insert_note(&self, note: NewNote) -> StoreResult<Note>;

    /// All notes owned by `user_id`, ordered by creation time descending.
    async fn list_notes_by_user(&self, user_id: UserId) -> StoreResult<Vec<Note>>;

    /// Look up a note by id, regardless of owner.
    async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Replace a note's `content` field and bump `updated_at`.
    /// Fails with `NoteNotFound` if the note does not exist.
    async fn update_note_content(&self, id: NoteId, content: Option<String>) -> StoreResult<Note>;

    /// Remove a note. Fails with `NoteNotFound` if the note does not exist.
    async fn delete_note(&self, id: NoteId) -> StoreResult<()>;
}
