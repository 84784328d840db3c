//! User infrastructure module
//!
//! Provides the in-memory user repository and the user service that the
//! API layer talks to.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
