use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::{driver_hours, passenger_hours, worked_hours};
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::store::Storage;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::resolve_month;
use crate::utils::formatting::hours2decimal;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let month = resolve_month(month)?;
        let storage = Storage::open(cfg)?;
        let entries = storage.entries.entries_for_month(&cfg.user, month)?;

        header(month.title());

        if entries.is_empty() {
            info(format!("No entries for {}.", month));
            return Ok(());
        }

        println!("{}", entries_table(&entries).render(separator(cfg)));
        let total: f64 = entries.iter().map(worked_hours).sum();
        println!("Worked: {} h in {} entries", hours2decimal(total), entries.len());
    }

    Ok(())
}

pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

fn entries_table(entries: &[TimeEntry]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("KIND", 16),
        Column::new("POS", 3),
        Column::new("SPAN", 11),
        Column::new("PAUSE", 5),
        Column::new("HOURS", 6),
        Column::new("DRIVER", 6),
        Column::new("PASS.", 6),
    ]);

    for e in entries {
        let travel = |h: f64| {
            if h > 0.0 {
                hours2decimal(h)
            } else {
                colorize_optional("")
            }
        };

        table.add_row(vec![
            e.id.to_string(),
            e.date().to_string(),
            e.kind.label().to_string(),
            e.location.code().to_string(),
            colorize_optional(&e.span_label()),
            e.pause_minutes.to_string(),
            hours2decimal(worked_hours(e)),
            travel(driver_hours(e)),
            travel(passenger_hours(e)),
        ]);
    }

    table
}
