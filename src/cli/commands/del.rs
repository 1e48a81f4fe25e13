use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::Storage;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let storage = Storage::open(cfg)?;

        let entry = storage
            .entries
            .entry(&cfg.user, *id)?
            .ok_or(AppError::EntryNotFound(*id))?;

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({} {})? This action is irreversible.",
                entry.id,
                entry.date(),
                entry.span_label()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = DeleteLogic::apply(&storage, &cfg.user, *id)?;
        success(format!("Entry #{} of {} has been deleted.", deleted.id, deleted.date()));
    }

    Ok(())
}
