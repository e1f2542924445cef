use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::env;
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                print!("{}", std::fs::read_to_string(&path)?);
            } else {
                info("No configuration file found; showing defaults:");
                let yaml =
                    serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
                print!("{}", yaml);
            }
            return Ok(());
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK");
            } else {
                for p in problems {
                    warning(p);
                }
            }
            return Ok(());
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save()?;
            }

            let chosen = editor
                .clone()
                .or_else(|| env::var("EDITOR").ok())
                .or_else(|| env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let status = Command::new(&chosen).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!("editor '{}' failed", chosen)));
            }
            return Ok(());
        }

        info("Nothing to do. Try `config --print`, `--check`, or `--edit`.");
    }
    Ok(())
}
