use super::list::separator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_overtime};
use crate::utils::date::resolve_month;
use crate::utils::formatting::{hours2decimal, hours2readable, percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month } = cmd {
        let month = resolve_month(month)?;
        let storage = Storage::open(cfg)?;
        let report = ReportLogic::month(&storage, &cfg.user, month)?;
        let t = &report.totals;

        header(format!("{} · {}", month.title(), report.user_id));

        let mut weeks = Table::new(vec![
            Column::new("WEEK", 4),
            Column::new("FROM", 10),
            Column::new("TO", 10),
            Column::new("HOURS", 7),
            Column::new("PASSENGER", 9),
        ]);
        for w in &t.weeks {
            weeks.add_row(vec![
                w.iso_week.to_string(),
                w.from.to_string(),
                w.to.to_string(),
                hours2decimal(w.compensated_hours),
                hours2decimal(w.passenger_hours),
            ]);
        }
        println!("{}", weeks.render(separator(cfg)));

        let color = color_for_overtime(t.overtime);
        println!("{:<26} {} h", "Compensated hours", hours2decimal(t.compensated_hours));
        println!(
            "{:<26} {} h ({} h raw)",
            "Compensated passenger",
            hours2decimal(t.compensated_passenger_hours),
            hours2decimal(t.passenger_hours)
        );
        println!("{:<26} {} h", "Total worked", hours2decimal(t.total_hours_worked));
        println!("{:<26} {} h", "Expected", hours2decimal(t.expected_hours));
        println!(
            "{:<26} {}{}{} ({} h)",
            "Overtime",
            color,
            hours2readable(t.overtime, true, false),
            RESET,
            hours2decimal(t.overtime)
        );
        println!("{:<26} {}", "Percentage", percent(t.percentage));
    }

    Ok(())
}
