use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Storage;
use crate::utils::date::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        team,
        force,
    } = cmd
    {
        let month = resolve_month(month)?;
        let storage = Storage::open(cfg)?;

        let rows = ExportLogic::export(
            &storage,
            &cfg.user,
            *format,
            file,
            month,
            team.as_deref(),
            *force,
        )?;
        tracing::debug!(rows, format = format.as_str(), "export finished");
    }

    Ok(())
}
