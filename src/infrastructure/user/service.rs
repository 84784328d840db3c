//! User service
//!
//! Pure delegation to the repository; it performs no validation or
//! transformation and exists as the seam between transport and storage.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// User service
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");
        self.repository.list().await
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        info!(name = %request.name, email = %request.email, "Creating user");

        self.repository
            .create(NewUser::new(request.name, request.email))
            .await
    }

    /// Delete a user by id
    ///
    /// Returns `false` when the id was absent; deleting a missing id is
    /// not an error.
    pub async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting user");
        self.repository.delete(id).await
    }

    /// Get a user by id
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = service();

        let created = service
            .create(CreateUserRequest {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.name(), "Alice");

        let users = service.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id(), created.id());

        let fetched = service.get(created.id()).await.unwrap();
        assert_eq!(fetched.unwrap().email(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_delete_passes_through() {
        let service = service();

        let created = service
            .create(CreateUserRequest {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();

        assert!(service.delete(created.id()).await.unwrap());
        assert!(!service.delete(created.id()).await.unwrap());
        assert_eq!(service.count().await.unwrap(), 0);
    }
}
