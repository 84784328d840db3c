//! User repository trait

use async_trait::async_trait;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Repository for the user collection
///
/// The storage component exclusively owns the collection; ids are assigned
/// on creation and never reused after deletion.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert a new user, assigning the next unused id
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Insert or replace a user at its already-assigned id
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by id
    ///
    /// Returns `false` when the id is absent; a missing id is a silent
    /// no-op, never an error.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;
}
