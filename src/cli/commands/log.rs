use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::Backend;
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if cfg.backend == Backend::Memory {
            warning("The memory backend keeps no internal log.");
            return Ok(());
        }

        let store = SqliteStore::open(&cfg.database)?;
        let rows = store.audit_log()?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log ({}):\n", cfg.database);
        for line in LogLogic::render(&rows) {
            println!("{}", line);
        }
    } else {
        info("Use --print to show the internal log.");
    }

    Ok(())
}
