//! attlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod notify;
pub mod remote;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg, cli.test),
        Commands::Summary => cli::commands::summary::handle(cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Sync => cli::commands::sync::handle(cfg, cli.test),
        Commands::Remind { .. } => cli::commands::remind::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; command-line overrides are applied on top.
    let mut cfg = Config::load();

    if let Some(custom_store) = &cli.store {
        cfg.store_file = custom_store.clone();
    }
    if let Some(custom_remote) = &cli.remote {
        cfg.backup_root = custom_remote.clone();
    }

    dispatch(&cli, &cfg)
}
