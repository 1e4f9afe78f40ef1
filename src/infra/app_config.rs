use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "CARBOOK_DB_PATH";
pub const CONFIG_PATH_ENV: &str = "CARBOOK_CONFIG_PATH";
pub const DATA_HOME_ENV: &str = "CARBOOK_DATA_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    toml::from_str(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

/// Pick the database file: command line, then environment, then config, then
/// the data directory.
pub fn resolve_database_path(
    cli: Option<PathBuf>,
    env: Option<String>,
    config: &AppConfig,
) -> PathBuf {
    cli.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.database_path.clone())
        .unwrap_or_else(|| app_data_dir().join("carbook.sqlite"))
}

pub fn log_path() -> PathBuf {
    app_data_dir().join("carbook.log")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_HOME_ENV) {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Carbook");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Carbook");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("carbook");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("carbook");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".carbook")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins() {
        let config = AppConfig {
            database_path: Some("/from/config.sqlite".into()),
            log_level: None,
        };
        let path = resolve_database_path(
            Some("/from/cli.sqlite".into()),
            Some("/from/env.sqlite".into()),
            &config,
        );
        assert_eq!(path, PathBuf::from("/from/cli.sqlite"));
    }

    #[test]
    fn test_env_then_config() {
        let config = AppConfig {
            database_path: Some("/from/config.sqlite".into()),
            log_level: None,
        };
        assert_eq!(
            resolve_database_path(None, Some("/from/env.sqlite".into()), &config),
            PathBuf::from("/from/env.sqlite")
        );
        assert_eq!(
            resolve_database_path(None, Some(String::new()), &config),
            PathBuf::from("/from/config.sqlite")
        );
    }

    #[test]
    fn test_default_lands_in_data_dir() {
        let path = resolve_database_path(None, None, &AppConfig::default());
        assert!(path.to_string_lossy().ends_with("carbook.sqlite"));
    }

    #[test]
    fn test_config_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(load_config(&path).unwrap(), AppConfig::default());

        let config = AppConfig {
            database_path: Some(dir.path().join("db.sqlite")),
            log_level: Some("debug".into()),
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let config: AppConfig = toml::from_str(r#"log_level = "info""#).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.database_path, None);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database_path = [").unwrap();
        assert!(load_config(&path).is_err());
    }
}
