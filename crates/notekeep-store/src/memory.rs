//! In-memory store backend.
//!
//! Implements the same [`Backend`] contract as the PostgreSQL store over
//! plain hash maps, suitable for tests and local development where no
//! database is available. Data lives only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use notekeep_core::{Note, NoteId, User, UserId};
use tokio::sync::RwLock;

use crate::backend::Backend;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NewUser};

/// In-memory implementation of the store contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Backend for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let record = User {
            id: UserId::new(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert_note(&self, note: NewNote) -> StoreResult<Note> {
        let now = Utc::now();
        let record = Note {
            id: NoteId::new(),
            user_id: note.user_id,
            text: note.text,
            content: note.content,
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.notes.write().await;
        notes.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_notes_by_user(&self, user_id: UserId) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut owned: Vec<Note> = notes
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.get(&id).cloned())
    }

    async fn update_note_content(&self, id: NoteId, content: Option<String>) -> StoreResult<Note> {
        let mut notes = self.notes.write().await;
        let note = notes.get_mut(&id).ok_or(StoreError::NoteNotFound(id))?;
        note.content = content;
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<()> {
        let mut notes = self.notes.write().await;
        notes
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoteNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_user_assigns_id() {
        let store = MemoryStore::new();
        let user = store.insert_user(new_user("a@x.com")).await.unwrap();
        let found = store.find_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(user.id, found.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@x.com")).await.unwrap();

        let err = store.insert_user(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(email) if email == "a@x.com"));
    }

    #[tokio::test]
    async fn test_find_user_by_email_missing() {
        let store = MemoryStore::new();
        assert!(store.find_user_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_notes_newest_first_and_scoped_to_owner() {
        let store = MemoryStore::new();
        let alice = store.insert_user(new_user("alice@x.com")).await.unwrap();
        let bob = store.insert_user(new_user("bob@x.com")).await.unwrap();

        let first = store
            .insert_note(NewNote {
                user_id: alice.id,
                text: "first".to_string(),
                content: None,
            })
            .await
            .unwrap();
        // Distinct timestamps for a deterministic ordering check.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store
            .insert_note(NewNote {
                user_id: alice.id,
                text: "second".to_string(),
                content: None,
            })
            .await
            .unwrap();
        store
            .insert_note(NewNote {
                user_id: bob.id,
                text: "bobs".to_string(),
                content: None,
            })
            .await
            .unwrap();

        let listed = store.list_notes_by_user(alice.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert!(listed.iter().all(|n| n.user_id == alice.id));
    }

    #[tokio::test]
    async fn test_update_note_content_bumps_updated_at() {
        let store = MemoryStore::new();
        let user = store.insert_user(new_user("a@x.com")).await.unwrap();
        let note = store
            .insert_note(NewNote {
                user_id: user.id,
                text: "hi".to_string(),
                content: None,
            })
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = store
            .update_note_content(note.id, Some("body".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.content.as_deref(), Some("body"));
        assert_eq!(updated.text, "hi");
        assert!(updated.updated_at > note.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_note_fails() {
        let store = MemoryStore::new();
        let err = store
            .update_note_content(NoteId::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_note_removes_it() {
        let store = MemoryStore::new();
        let user = store.insert_user(new_user("a@x.com")).await.unwrap();
        let note = store
            .insert_note(NewNote {
                user_id: user.id,
                text: "hi".to_string(),
                content: None,
            })
            .await
            .unwrap();

        store.delete_note(note.id).await.unwrap();
        assert!(store.get_note(note.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_note(note.id).await.unwrap_err(),
            StoreError::NoteNotFound(_)
        ));
    }
}
