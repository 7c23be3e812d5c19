//! rWorkTracker library root.
//! Exposes the record store, its storage engines, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::store::RecordStore;
pub use db::{MemoryBackend, RecordBackend, SqliteBackend};
pub use models::{Summary, Timestamp, WorkRecord};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Prompt => cli::commands::prompt::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_path(custom_db)?
            .to_string_lossy()
            .to_string();
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
