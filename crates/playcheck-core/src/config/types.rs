//! Configuration types

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Main configuration for playcheck
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the asset tree (the Android app module folder)
    pub app_folder: Option<PathBuf>,

    /// Error titles to suppress
    #[serde(deserialize_with = "deserialize_ignore")]
    pub ignore: Vec<String>,
}

/// Values supplied on the command line or through the environment.
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// App folder override
    pub app_folder: Option<PathBuf>,
    /// Ignore list override
    pub ignore: Option<Vec<String>>,
}

impl Config {
    /// Create a configuration for the given app folder
    pub fn new(app_folder: impl Into<PathBuf>) -> Self {
        Self {
            app_folder: Some(app_folder.into()),
            ignore: Vec::new(),
        }
    }

    /// Add ignored titles
    pub fn with_ignore<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = normalize_ignore(titles.into_iter().map(Into::into));
        self
    }

    /// Apply overrides on top of this configuration
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(app_folder) = overrides.app_folder {
            self.app_folder = Some(app_folder);
        }
        if let Some(ignore) = overrides.ignore {
            self.ignore = normalize_ignore(ignore);
        }
        self
    }

    /// The configured app folder, or an error if none was given
    pub fn require_app_folder(&self) -> Result<&Path, ConfigError> {
        self.app_folder
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField("app_folder".to_string()))
    }
}

/// Parse a comma-separated ignore list.
///
/// Whitespace around each title is dropped, as are empty entries.
pub fn parse_ignore_list(raw: &str) -> Vec<String> {
    normalize_ignore(raw.split(',').map(str::to_string))
}

fn normalize_ignore<I: IntoIterator<Item = String>>(titles: I) -> Vec<String> {
    titles
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IgnoreValue {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_ignore<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IgnoreValue::deserialize(deserializer)? {
        IgnoreValue::List(list) => normalize_ignore(list),
        IgnoreValue::Csv(raw) => parse_ignore_list(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignore_list() {
        assert_eq!(
            parse_ignore_list("Invalid listing locale , title.txt too large"),
            vec!["Invalid listing locale", "title.txt too large"]
        );
        assert!(parse_ignore_list("").is_empty());
        assert!(parse_ignore_list(" , ").is_empty());
    }

    #[test]
    fn test_ignore_accepts_list_or_string() {
        let from_list: Config = toml::from_str("ignore = [\"a\", \" b \"]").unwrap();
        assert_eq!(from_list.ignore, vec!["a", "b"]);

        let from_csv: Config = toml::from_str("ignore = \"a, b\"").unwrap();
        assert_eq!(from_csv.ignore, vec!["a", "b"]);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::new("app").with_ignore(["x"]).apply(ConfigOverrides {
            app_folder: Some(PathBuf::from("android/app")),
            ignore: None,
        });
        assert_eq!(config.app_folder, Some(PathBuf::from("android/app")));
        assert_eq!(config.ignore, vec!["x"]);

        let config = config.apply(ConfigOverrides {
            app_folder: None,
            ignore: Some(vec![" y ".to_string(), String::new()]),
        });
        assert_eq!(config.ignore, vec!["y"]);
    }

    #[test]
    fn test_require_app_folder() {
        assert!(Config::default().require_app_folder().is_err());
        assert_eq!(
            Config::new("app").require_app_folder().unwrap(),
            Path::new("app")
        );
    }
}
