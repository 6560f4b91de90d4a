//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "playcheck.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "playcheck.yaml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".playcheck.toml";

/// Environment variable holding the app folder (GitHub Action input)
pub const APP_FOLDER_ENV: &str = "INPUT_APPFOLDER";

/// Environment variable holding the ignored error titles (GitHub Action input)
pub const IGNORE_ENV: &str = "INPUT_IGNORE";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".playcheck.yaml",
    ]
}
