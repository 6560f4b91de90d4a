//! Locales command

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use playcheck_metadata::locales;

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// List the locales accepted by the Play Store
#[derive(Debug, Args)]
pub struct LocalesCommand {
    /// Only check whether this tag is accepted
    #[arg(long, value_name = "TAG")]
    pub check: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    locale: &'a str,
    valid: bool,
}

impl LocalesCommand {
    /// Execute the locales command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(check = ?self.check, "executing locales command");

        match &self.check {
            Some(tag) => self.check_tag(tag, cli),
            None => {
                list_locales(cli)?;
                Ok(exit_codes::SUCCESS)
            }
        }
    }

    fn check_tag(&self, tag: &str, cli: &Cli) -> anyhow::Result<i32> {
        let valid = locales::is_valid(tag);

        match cli.format {
            OutputFormat::Json => {
                let out = CheckOutput { locale: tag, valid };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            OutputFormat::Text => {
                if valid {
                    if !cli.quiet {
                        output::success(&format!("'{}' is a valid Play Store locale", tag));
                    }
                } else {
                    output::error(&format!("'{}' is not a valid Play Store locale", tag));
                }
            }
        }

        Ok(if valid {
            exit_codes::SUCCESS
        } else {
            exit_codes::VALIDATION_FAILED
        })
    }
}

fn list_locales(cli: &Cli) -> anyhow::Result<()> {
    let all = locales::all();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(all)?);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", style(format!("{} locales", all.len())).bold());
            }
            for tag in all {
                println!("  {}", tag);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_serialization() {
        let out = CheckOutput {
            locale: "en-US",
            valid: locales::is_valid("en-US"),
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["locale"], "en-US");
        assert_eq!(json["valid"], true);
    }

    #[test]
    fn test_rejects_lowercase_region() {
        assert!(!locales::is_valid("en-us"));
    }
}
