use super::parse_location;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::worked_hours;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::hours2decimal;
use crate::utils::time::{at, now_minute, parse_optional_time};

/// `start` and `stop`. `--at HH:MM` refers to today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Start { at: when, pos } => {
            let moment = at(date::today(), parse_optional_time(when.as_ref())?)
                .unwrap_or_else(now_minute);
            let location = parse_location(pos.as_ref())?.unwrap_or_default();

            let storage = Storage::open(cfg)?;
            let entry = ClockLogic::start(&storage, &cfg.user, moment, location)?;

            success(format!(
                "Clocked in at {} ({}), entry #{}",
                entry.start_str(),
                entry.location.label(),
                entry.id
            ));
        }
        Commands::Stop { at: when, pause } => {
            let moment = at(date::today(), parse_optional_time(when.as_ref())?)
                .unwrap_or_else(now_minute);

            let storage = Storage::open(cfg)?;
            let entry = ClockLogic::stop(&storage, &cfg.user, moment, *pause)?;

            success(format!(
                "Clocked out: {} {} ({} h)",
                entry.date(),
                entry.span_label(),
                hours2decimal(worked_hours(&entry))
            ));
        }
        _ => {}
    }

    Ok(())
}
