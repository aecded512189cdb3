use crate::error::{CareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// What the interactive shell does with unsaved records on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOnExit {
    #[default]
    Ask,
    Always,
    Never,
}

impl fmt::Display for SaveOnExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SaveOnExit::Ask => "ask",
            SaveOnExit::Always => "always",
            SaveOnExit::Never => "never",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SaveOnExit {
    type Err = CareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ask" => Ok(SaveOnExit::Ask),
            "always" => Ok(SaveOnExit::Always),
            "never" => Ok(SaveOnExit::Never),
            other => Err(CareError::Config(format!(
                "save-on-exit must be ask, always or never (got '{}')",
                other
            ))),
        }
    }
}

/// Configuration, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareConfig {
    /// Data file used when `--file` is not given. Relative paths resolve
    /// against the working directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub save_on_exit: SaveOnExit,

    /// Load the data file before running any command
    #[serde(default = "default_load_on_start")]
    pub load_on_start: bool,
}

fn default_load_on_start() -> bool {
    true
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            save_on_exit: SaveOnExit::default(),
            load_on_start: default_load_on_start(),
        }
    }
}

impl CareConfig {
    pub const KEYS: [&'static str; 3] = ["data-file", "save-on-exit", "load-on-start"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CareError::Io)?;
        let config: CareConfig =
            serde_json::from_str(&content).map_err(CareError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CareError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CareError::Serialization)?;
        fs::write(config_path, content).map_err(CareError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "save-on-exit" => Some(self.save_on_exit.to_string()),
            "load-on-start" => Some(self.load_on_start.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "save-on-exit" => self.save_on_exit = value.parse()?,
            "load-on-start" => {
                self.load_on_start = value.trim().parse().map_err(|_| {
                    CareError::Config(format!("load-on-start must be true or false (got '{}')", value))
                })?
            }
            other => return Err(CareError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
