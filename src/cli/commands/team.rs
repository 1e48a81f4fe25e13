use super::list::separator;
use crate::cli::parser::{Commands, TeamCommands};
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::core::team::TeamLogic;
use crate::errors::AppResult;
use crate::models::team::Member;
use crate::store::Storage;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_overtime, colorize_optional, colorize_published};
use crate::utils::date::resolve_month;
use crate::utils::formatting::{hours2decimal, percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Team { action } = cmd else {
        return Ok(());
    };

    let storage = Storage::open(cfg)?;

    match action {
        TeamCommands::Create { id, name } => {
            let team = TeamLogic::create(&storage, id, name)?;
            success(format!("Team '{}' ({}) created.", team.id, team.name));
        }
        TeamCommands::AddMember {
            team,
            user_id,
            name,
            email,
        } => {
            let member = Member {
                display_name: name.clone(),
                email: email.clone(),
                ..Member::new(user_id)
            };
            TeamLogic::add_member(&storage, team, &member)?;
            success(format!("{} is a member of '{}'.", member.label(), team));
        }
        TeamCommands::RemoveMember { team, user_id } => {
            if TeamLogic::remove_member(&storage, team, user_id)? {
                success(format!("{} removed from '{}'.", user_id, team));
            } else {
                warning(format!("{} is not a member of '{}'.", user_id, team));
            }
        }
        TeamCommands::Members { team } => {
            let members = TeamLogic::members(&storage, team)?;
            header(format!("Members of {}", team));

            if members.is_empty() {
                info("No members yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("USER", 16),
                Column::new("NAME", 24),
                Column::new("EMAIL", 28),
            ]);
            for m in &members {
                table.add_row(vec![
                    m.user_id.clone(),
                    colorize_optional(m.display_name.as_deref().unwrap_or("")),
                    colorize_optional(m.email.as_deref().unwrap_or("")),
                ]);
            }
            println!("{}", table.render(separator(cfg)));
        }
        TeamCommands::Report { team, month } => {
            let month = resolve_month(month)?;
            let report = ReportLogic::team(&storage, team, month)?;

            header(format!("{} · {}", report.team.name, month.title()));

            if report.rows.is_empty() {
                info("No members yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("MEMBER", 24),
                Column::new("HOURS", 7),
                Column::new("OVERTIME", 8),
                Column::new("%", 7),
                Column::new("PUBLISHED", 9),
            ]);
            for row in &report.rows {
                table.add_row(vec![
                    row.member.label().to_string(),
                    hours2decimal(row.hours_worked),
                    format!(
                        "{}{}{}",
                        color_for_overtime(row.overtime),
                        hours2decimal(row.overtime),
                        RESET
                    ),
                    percent(row.percentage),
                    colorize_published(row.is_published),
                ]);
            }
            println!("{}", table.render(separator(cfg)));
        }
    }

    Ok(())
}
