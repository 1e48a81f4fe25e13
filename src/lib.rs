//! teamhours library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (calculator, stores, reports, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Settings { .. } => commands::settings::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Start { .. } | Commands::Stop { .. } => {
            commands::clock::handle(&cli.command, cfg)
        }
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg),
        Commands::Publish { .. } => commands::publish::handle(&cli.command, cfg),
        Commands::Team { .. } => commands::team::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over the configured filter.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. in tests) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    init_tracing(&cfg);
    tracing::debug!(user = %cfg.user, backend = ?cfg.backend, db = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}
