// src/export/logic.rs

use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EntryExport, MemberExport, MonthExport};
use crate::models::month::MonthRef;
use crate::store::Storage;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the month of `user_id`, or the team summary when `team` is set.
    ///
    /// Returns the number of rows written (0 when there was nothing to export).
    pub fn export(
        storage: &Storage,
        user_id: &str,
        format: ExportFormat,
        file: &str,
        month: MonthRef,
        team: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match team {
            Some(team_id) => Self::export_team(storage, team_id, format, path, month),
            None => Self::export_month(storage, user_id, format, path, month),
        }
    }

    fn export_month(
        storage: &Storage,
        user_id: &str,
        format: ExportFormat,
        path: &Path,
        month: MonthRef,
    ) -> AppResult<usize> {
        let report = ReportLogic::month(storage, user_id, month)?;

        if report.entries.is_empty() {
            warning(format!("No entries found for {}.", month));
            return Ok(0);
        }

        let rows: Vec<EntryExport> = report
            .entries
            .iter()
            .map(|e| EntryExport::from_entry(e, &report.settings))
            .collect();
        let count = rows.len();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(
                &MonthExport {
                    user_id,
                    month,
                    totals: &report.totals,
                    entries: rows,
                },
                path,
            )?,
        }

        Ok(count)
    }

    fn export_team(
        storage: &Storage,
        team_id: &str,
        format: ExportFormat,
        path: &Path,
        month: MonthRef,
    ) -> AppResult<usize> {
        let report = ReportLogic::team(storage, team_id, month)?;

        if report.rows.is_empty() {
            warning(format!("Team '{}' has no members.", team_id));
            return Ok(0);
        }

        let rows: Vec<MemberExport> = report.rows.iter().map(MemberExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
