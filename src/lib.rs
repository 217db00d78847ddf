//! timeclock library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind them.

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

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Jobs => cli::commands::jobs::handle(cli, cfg),
        Commands::Select { .. } => cli::commands::select::handle(cli, cfg),
        Commands::Notes { .. } => cli::commands::notes::handle(cli, cfg),
        Commands::ClockIn | Commands::BreakStart | Commands::BreakEnd | Commands::ClockOut { .. } => {
            cli::commands::clock::handle(cli, cfg)
        }
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Session { .. } => cli::commands::session::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Punches { .. } => cli::commands::punches::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, mut cfg: Config) -> AppResult<Config> {
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        cfg.endpoint = Some(endpoint.clone());
    }
    if let Some(jobs_file) = &cli.jobs_file {
        cfg.jobs_file = Some(jobs_file.clone());
    }
    if let Some(session) = &cli.session {
        cfg.session = session.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = apply_overrides(&cli, Config::load()?)?;
    dispatch(&cli, &cfg)
}
