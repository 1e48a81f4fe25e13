use super::EntryArgs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::duration::worked_hours;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::success;
use crate::utils::formatting::hours2decimal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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
            date: date.as_ref(),
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
        let entry = AddLogic::edit(&storage, &cfg.user, *id, &draft)?;

        success(format!(
            "Entry #{} updated: {} {} ({} h)",
            entry.id,
            entry.date(),
            entry.span_label(),
            hours2decimal(worked_hours(&entry))
        ));
    }

    Ok(())
}
