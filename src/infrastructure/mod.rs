//! Infrastructure layer - Storage implementations and services

pub mod logging;
pub mod user;
