//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{LocalesCommand, ValidateCommand};

/// playcheck - validate Google Play listing assets
#[derive(Debug, Parser)]
#[command(name = "playcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with CI annotations
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the listing assets of an app folder
    Validate(ValidateCommand),

    /// List the locales accepted by the Play Store
    Locales(LocalesCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> anyhow::Result<i32> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Validate(ref cmd) => cmd.execute(&self),
            Commands::Locales(ref cmd) => cmd.execute(&self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands() {
        let cmd = Cli::command();
        let names: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["validate", "locales"]);
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "playcheck",
            "--format",
            "json",
            "validate",
            "--app-folder",
            "app",
            "--ignore",
            "Invalid listing locale,title.txt too large",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Validate(cmd) => {
                assert_eq!(cmd.app_folder, Some(std::path::PathBuf::from("app")));
                assert_eq!(
                    cmd.ignore,
                    Some(vec![
                        "Invalid listing locale".to_string(),
                        "title.txt too large".to_string()
                    ])
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
