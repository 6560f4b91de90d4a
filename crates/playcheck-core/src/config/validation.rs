//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_app_folder(config)?;
    validate_ignore(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_app_folder(config: &Config) -> Result<()> {
    let app_folder = config.require_app_folder()?;
    if app_folder.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "app_folder".to_string(),
            message: "app folder cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_ignore(config: &Config) -> Result<()> {
    if let Some(title) = config.ignore.iter().find(|t| t.contains('\n')) {
        return Err(ConfigError::InvalidValue {
            field: "ignore".to_string(),
            message: format!("title must be a single line: {:?}", title),
        }
        .into());
    }
    Ok(())
}
