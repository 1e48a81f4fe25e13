use super::EntryArgs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::duration::worked_hours;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::{info, success};
use crate::utils::formatting::hours2decimal;

/// Add a work entry, or a special entry when `--kind` is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        pause,
        duration,
        driver,
        passenger,
        pos,
        kind,
    } = cmd
    {
        let draft = EntryArgs {
            date: Some(date),
            start: start.as_ref(),
            end: end.as_ref(),
            pause: *pause,
            duration: duration.as_ref(),
            driver: *driver,
            passenger: *passenger,
            pos: pos.as_ref(),
            kind: kind.as_ref(),
        }
        .into_draft()?;

        let storage = Storage::open(cfg)?;
        let entry = AddLogic::apply(&storage, &cfg.user, &draft)?;

        if entry.is_running() {
            info(format!(
                "Entry #{} started at {} ({}). Close it with `stop` or `edit --out`.",
                entry.id,
                entry.start_str(),
                entry.location.label()
            ));
        } else {
            success(format!(
                "Entry #{} added: {} {} {} ({} h)",
                entry.id,
                entry.date(),
                entry.kind.label(),
                entry.span_label(),
                hours2decimal(worked_hours(&entry))
            ));
        }
    }

    Ok(())
}
