//! Month and team reports.
//!
//! Team reports fan out one scoped thread per member. Each worker reads only
//! its own member's published snapshot, so workers share nothing mutable and
//! finish in any order; rows are sorted once everything has been joined.

use crate::core::calculator::summary::{MonthTotals, summarize_month};
use crate::core::team::TeamLogic;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::models::month::MonthRef;
use crate::models::settings::UserSettings;
use crate::models::summary::MemberSummary;
use crate::models::team::{Member, Team};
use crate::store::{Storage, TeamStore};
use std::cmp::Ordering;
use std::thread;

/// A user's own month: live entries, current settings and totals.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub user_id: String,
    pub entries: Vec<TimeEntry>,
    pub settings: UserSettings,
    pub totals: MonthTotals,
}

#[derive(Debug, Clone)]
pub struct TeamReport {
    pub team: Team,
    pub month: MonthRef,
    pub rows: Vec<MemberSummary>,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn month(storage: &Storage, user_id: &str, month: MonthRef) -> AppResult<MonthReport> {
        let entries = storage.entries.entries_for_month(user_id, month)?;
        let settings = storage.settings.load_settings(user_id)?;
        let totals = summarize_month(&entries, &settings, month);

        Ok(MonthReport {
            user_id: user_id.to_string(),
            entries,
            settings,
            totals,
        })
    }

    pub fn team(storage: &Storage, team_id: &str, month: MonthRef) -> AppResult<TeamReport> {
        let team = TeamLogic::require(storage, team_id)?;
        let members = storage.teams.members(team_id)?;
        let rows = member_summaries(storage.teams.as_ref(), team_id, &members, month);

        Ok(TeamReport { team, month, rows })
    }
}

/// Summaries of `members` for `month`, sorted for display.
///
/// A member whose data cannot be fetched gets a zero, unpublished row; the
/// failure is logged and the other rows are unaffected.
pub fn member_summaries(
    teams: &dyn TeamStore,
    team_id: &str,
    members: &[Member],
    month: MonthRef,
) -> Vec<MemberSummary> {
    let mut rows: Vec<MemberSummary> = thread::scope(|s| {
        let workers: Vec<_> = members
            .iter()
            .map(|member| {
                let handle = s.spawn(move || member_summary(teams, team_id, member, month));
                (member, handle)
            })
            .collect();

        workers
            .into_iter()
            .map(|(member, handle)| match handle.join() {
                Ok(Ok(row)) => row,
                Ok(Err(e)) => {
                    tracing::warn!(
                        team_id,
                        user_id = %member.user_id,
                        error = %e,
                        "member data unavailable, using zero row"
                    );
                    MemberSummary::zeroed(member.clone())
                }
                Err(_) => {
                    tracing::error!(team_id, user_id = %member.user_id, "member worker panicked");
                    MemberSummary::zeroed(member.clone())
                }
            })
            .collect()
    });

    sort_summaries(&mut rows);
    rows
}

/// Summary of one member from the published snapshot of `month`.
pub fn member_summary(
    teams: &dyn TeamStore,
    team_id: &str,
    member: &Member,
    month: MonthRef,
) -> AppResult<MemberSummary> {
    let Some(snapshot) = teams.published_month(team_id, &member.user_id, month)? else {
        return Ok(MemberSummary::zeroed(member.clone()));
    };

    let totals = summarize_month(&snapshot.entries, &snapshot.settings, month);

    // the team roster wins; the member's own settings fill the gaps
    let mut member = member.clone();
    if member.display_name.is_none() {
        member.display_name = snapshot.settings.display_name.clone();
    }
    if member.email.is_none() {
        member.email = snapshot.settings.email.clone();
    }

    Ok(MemberSummary {
        member,
        hours_worked: totals.total_hours_worked,
        overtime: totals.overtime,
        percentage: totals.percentage,
        user_settings: snapshot.settings,
        entries: snapshot.entries,
        is_published: true,
    })
}

/// Display-name order, case-insensitive, falling back to email then user id.
pub fn sort_summaries(rows: &mut [MemberSummary]) {
    rows.sort_by(|a, b| compare_members(&a.member, &b.member));
}

fn compare_members(a: &Member, b: &Member) -> Ordering {
    a.label()
        .to_lowercase()
        .cmp(&b.label().to_lowercase())
        .then_with(|| a.user_id.cmp(&b.user_id))
}
