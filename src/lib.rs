//! User Directory
//!
//! A minimal full-stack CRUD service: three REST routes over an in-memory
//! user store, plus a static page that lists, creates, and deletes records
//! through them. The store is memory-resident and resets on restart.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state with an empty in-memory store
pub async fn create_app_state() -> anyhow::Result<AppState> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    Ok(AppState { user_service })
}
