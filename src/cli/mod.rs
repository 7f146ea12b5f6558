//! CLI module for the Task Manager API
//!
//! Subcommands:
//! - `serve`: run the HTTP API (default)
//! - `init-db`: create the tasks table and exit

pub mod init_db;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Task Manager API - task CRUD behind bearer API keys
#[derive(Parser)]
#[command(name = "task-manager-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Create the tasks table in the configured database and exit
    InitDb,
}

/// Load `.env`, the layered configuration and the tracing subscriber
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
