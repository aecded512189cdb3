use crate::api::CareApi;
use crate::config::CareConfig;
use crate::error::{CareError, Result};
use crate::store::fs::{FileStorage, DEFAULT_DATA_FILE};
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "ELDERCARE_CONFIG_DIR";

pub struct CareContext {
    pub api: CareApi<FileStorage>,
    pub config: CareConfig,
}

/// Where config.json lives: `$ELDERCARE_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "eldercare", "eldercare")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CareError::Config("Could not determine config dir".to_string()))
}

/// Picks the data file: explicit path, then the configured one, then the default
/// name in `cwd`. Relative paths are taken against `cwd`.
pub fn resolve_data_file(cwd: &Path, explicit: Option<&Path>, config: &CareConfig) -> PathBuf {
    let chosen = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    if chosen.is_absolute() {
        chosen
    } else {
        cwd.join(chosen)
    }
}

pub fn initialize(cwd: &Path, data_file: Option<&Path>) -> Result<CareContext> {
    let config_dir = config_dir()?;
    let config = CareConfig::load(&config_dir)?;
    let path = resolve_data_file(cwd, data_file, &config);
    debug!(
        "config dir {}, data file {}",
        config_dir.display(),
        path.display()
    );

    let api = CareApi::new(FileStorage::new(path), config_dir);
    Ok(CareContext { api, config })
}
