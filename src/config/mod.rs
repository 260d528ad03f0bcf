use crate::core::time_source::SystemClock;
use crate::core::validate::{DEFAULT_MAX_SHIFT, ShiftRules};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_max_shift")]
    pub max_shift_hours: i64,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_prompt_timeout")]
    pub prompt_timeout_secs: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_max_shift() -> i64 {
    DEFAULT_MAX_SHIFT
}
fn default_utc_offset() -> i32 {
    1
}
fn default_prompt_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            max_shift_hours: default_max_shift(),
            utc_offset_hours: default_utc_offset(),
            prompt_timeout_secs: default_prompt_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.timesheets`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timesheets")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timesheets.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timesheets.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn shift_rules(&self) -> ShiftRules {
        ShiftRules::new(self.max_shift_hours)
    }

    pub fn system_clock(&self) -> AppResult<SystemClock> {
        SystemClock::with_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            AppError::Config(format!(
                "utc_offset_hours out of range: {}",
                self.utc_offset_hours
            ))
        })
    }

    /// Create the config directory and file (unless `is_test`) and an empty DB file.
    ///
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        // DB path: user provided (as given) or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
