use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::publish::PublishLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::success;
use crate::utils::date::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Publish { team, month } = cmd {
        let month = resolve_month(month)?;
        let storage = Storage::open(cfg)?;
        let snapshot = PublishLogic::apply(&storage, team, &cfg.user, month)?;

        success(format!(
            "Published {} ({} entries) to team '{}'.",
            snapshot.month,
            snapshot.entries.len(),
            snapshot.team_id
        ));
    }

    Ok(())
}
