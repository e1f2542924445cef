use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_utc_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Dieta paid per compensable session, in centavos.
    #[serde(default = "default_rate")]
    pub dieta_rate_cents: i64,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    /// Fixed municipal UTC offset; all timestamps are local to it.
    #[serde(default = "default_offset")]
    pub utc_offset: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_rate() -> i64 {
    150_000 // Q1,500.00
}
fn default_currency() -> String {
    "Q".to_string()
}
fn default_offset() -> String {
    "-06:00".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            dieta_rate_cents: default_rate(),
            currency_symbol: default_currency(),
            utc_offset: default_offset(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.dietario`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dietario")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dietario.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dietario.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Municipal offset parsed into a chrono type.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_utc_offset(&self.utc_offset)
    }

    /// Create config dir, config file, and pick the DB path.
    /// In test mode (`--test`) nothing is written to the home directory.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() {
                    p
                } else if is_test {
                    // keep relative test DBs where the caller put them
                    p
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    /// Sanity checks surfaced by `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.is_empty() {
            problems.push("database path is empty".to_string());
        }
        if self.dieta_rate_cents <= 0 {
            problems.push(format!(
                "dieta_rate_cents must be positive (found {})",
                self.dieta_rate_cents
            ));
        }
        if self.offset().is_err() {
            problems.push(format!("utc_offset '{}' is not ±HH:MM", self.utc_offset));
        }
        if self.separator_char.chars().count() != 1 {
            problems.push("separator_char must be a single character".to_string());
        }

        problems
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
