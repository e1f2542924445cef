use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{needs_migration, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            if needs_migration(&pool.conn)? {
                run_pending_migrations(&pool.conn)?;
                success("Migrations applied.");
            } else {
                info("Schema already up to date.");
            }
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity OK");
            } else {
                return Err(AppError::Other(format!("integrity check: {}", result)));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database vacuumed.");
        }

        if *show_info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
