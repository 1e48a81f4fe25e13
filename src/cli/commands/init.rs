use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::Backend;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let written = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = written.database.clone();

    println!("⚙️  Initializing teamhours…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    if cfg.backend == Backend::Memory {
        warning("The memory backend is selected: entries are not kept between runs.");
    }

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;

    if applied == 0 {
        info("Database schema already up to date.");
    }
    let versions = applied_versions(&pool.conn)?;
    tracing::debug!(?versions, "schema versions");

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
