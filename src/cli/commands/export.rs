use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::resolve_period;
use crate::utils::money::parse_amount;
use crate::utils::time::now_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        year,
        month,
        rate,
        force,
    } = cmd
    {
        let today = now_local(cfg.offset()?).date();
        let period = resolve_period(*year, *month, today)?;

        let rate_cents = match rate {
            Some(s) => parse_amount(s)
                .ok_or_else(|| AppError::Other(format!("invalid rate '{}'", s)))?,
            None => cfg.dieta_rate_cents,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::run(&mut pool, cfg, format, file, period, rate_cents, *force)?;
    }
    Ok(())
}
