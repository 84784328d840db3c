//! In-memory user repository implementation

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Records live in a HashMap behind a single RwLock. Ids come from a
/// monotonic counter starting at 1 and are never reused after deletion.
/// Nothing persists across process restarts.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        Ok(users.get(&id.value()).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(UserId::new(id), new_user.name, new_user.email);

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        // Keep future assigned ids unique even when the caller picked this one.
        self.next_id
            .fetch_max(user.id().value() + 1, Ordering::SeqCst);

        users.insert(user.id().value(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        Ok(users.remove(&id.value()).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        // Ascending id order is an artifact of this implementation, not a
        // contract of UserRepository.
        let mut result: Vec<_> = users.values().cloned().collect();
        result.sort_by_key(|u| u.id());
        Ok(result)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;

        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .create(NewUser::new("Alice", "alice@example.com"))
            .await
            .unwrap();
        let second = repo
            .create(NewUser::new("Bob", "bob@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);
        assert!(second.id() > first.id());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .create(NewUser::new("Alice", "alice@example.com"))
            .await
            .unwrap();
        let second = repo
            .create(NewUser::new("Bob", "bob@example.com"))
            .await
            .unwrap();

        assert!(repo.delete(second.id()).await.unwrap());

        let third = repo
            .create(NewUser::new("Carol", "carol@example.com"))
            .await
            .unwrap();

        assert!(third.id() > second.id());
        assert_ne!(third.id(), first.id());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_a_silent_noop() {
        let repo = InMemoryUserRepository::new();
        repo.create(NewUser::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        let removed = assert_ok!(repo.delete(UserId::new(999)).await);

        assert!(!removed);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let repo = InMemoryUserRepository::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            let user = repo
                .create(NewUser::new(format!("user{}", i), format!("u{}@example.com", i)))
                .await
                .unwrap();
            ids.push(user.id());
        }

        assert!(repo.delete(ids[1]).await.unwrap());
        assert!(repo.delete(ids[3]).await.unwrap());

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|u| u.id() != ids[1] && u.id() != ids[3]));
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_record() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(NewUser::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        let renamed = User::new(user.id(), "Alicia", "alicia@example.com");
        repo.save(renamed).await.unwrap();

        let fetched = repo.get(user.id()).await.unwrap().unwrap();
        assert_eq!(fetched.name(), "Alicia");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_with_explicit_id_advances_allocator() {
        let repo = InMemoryUserRepository::new();

        let imported = User::new(UserId::new(10), "Alice", "alice@example.com");
        repo.save(imported).await.unwrap();

        let created = repo
            .create(NewUser::new("Bob", "bob@example.com"))
            .await
            .unwrap();

        assert_eq!(created.id().value(), 11);
    }

    #[tokio::test]
    async fn test_get_missing_id() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(UserId::new(1)).await.unwrap().is_none());
    }
}
