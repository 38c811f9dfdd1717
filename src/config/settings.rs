use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::SearchConfig;

const APP_NAME: &str = "ArchiveSelect";
const CONFIG_FILE: &str = "search.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "archiveselect", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
///
/// `override_path` replaces the platform default; tests use it to keep
/// config I/O inside a temp directory.
pub fn get_config_file_path(override_path: Option<&Path>) -> Option<PathBuf> {
    match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => get_config_directory().map(|dir| dir.join(CONFIG_FILE)),
    }
}

/// Loads the last-used search configuration.
/// If the file doesn't exist, it creates a default one.
/// If the file is corrupted or cannot be parsed, it logs a warning
/// and falls back to the default configuration to prevent a crash.
pub fn load_config(override_path: Option<&Path>) -> Result<SearchConfig> {
    let config_path = get_config_file_path(override_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default config at {:?}",
            config_path
        );
        let default_config = SearchConfig::default();
        save_config(&default_config, override_path)?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path)?;

    match serde_json::from_str::<SearchConfig>(&config_content) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse config file at {:?}: {}. Falling back to default config.",
                config_path,
                e
            );
            Ok(SearchConfig::default())
        }
    }
}

/// Saves the provided configuration to the config file.
pub fn save_config(config: &SearchConfig, override_path: Option<&Path>) -> Result<()> {
    let config_path = get_config_file_path(override_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }
    }

    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_json)?;
    tracing::info!("Saved config to {:?}", config_path);

    Ok(())
}
