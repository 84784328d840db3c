//! CLI module for the user directory
//!
//! Provides subcommands for running the service in different modes:
//! - `serve`: API + static UI combined (default)
//! - `api`: API server only

pub mod api;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Directory - minimal CRUD service over an in-memory user store
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + UI server combined (default mode)
    Serve,

    /// Run API server only
    Api,
}
