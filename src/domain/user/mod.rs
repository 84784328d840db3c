//! User domain
//!
//! This module provides the user entity and the repository trait the
//! storage layer implements.

mod entity;
mod repository;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;
