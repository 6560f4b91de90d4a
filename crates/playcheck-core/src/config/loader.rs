//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::{Config, ConfigOverrides};
use super::validation::validate_config;

/// Load configuration from a file
///
/// The file is only parsed here; validation happens once overrides have been
/// applied, since the app folder is often supplied on the command line.
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `playcheck.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/playcheck.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Resolve the effective configuration.
///
/// Loads `explicit` when given (it must exist), otherwise searches from
/// `start_dir`; falls back to defaults when nothing is found. Overrides are
/// applied last and the result is validated.
pub fn resolve_config(
    start_dir: &Path,
    explicit: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<(Config, Option<PathBuf>)> {
    let config_path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start_dir),
    };

    let base = match &config_path {
        Some(path) => load_config(path)?,
        None => {
            debug!(dir = %start_dir.display(), "no config found, using defaults");
            Config::default()
        }
    };

    let config = base.apply(overrides);
    validate_config(&config)?;
    Ok((config, config_path))
}
