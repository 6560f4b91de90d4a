//! Validate command

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use playcheck_core::config::{resolve_config, APP_FOLDER_ENV, IGNORE_ENV};
use playcheck_core::{Config, ConfigOverrides};
use playcheck_metadata::{
    Annotation, LocalFs, Outcome, ReportSink, Reporter, RunReport, RunSummary, ValidationEngine,
};

use crate::cli::output::{self, ConsoleSink};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate the listing assets of an app folder
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// App module folder containing `src/<source set>/play`
    #[arg(long, env = APP_FOLDER_ENV)]
    pub app_folder: Option<PathBuf>,

    /// Comma-separated error titles that should not fail the run
    #[arg(long, env = IGNORE_ENV, value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Path to a config file (defaults to searching for playcheck.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// JSON shape of a finished run.
#[derive(Debug, Serialize)]
struct ValidationOutput<'a> {
    app_folder: &'a Path,
    config_path: Option<&'a Path>,
    failed: bool,
    summary: RunSummary,
    outcomes: &'a [Outcome],
    annotations: &'a [Annotation],
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(
            app_folder = ?self.app_folder,
            ignore = ?self.ignore,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;

        let overrides = ConfigOverrides {
            app_folder: self.app_folder.clone(),
            ignore: self.ignore.clone(),
        };

        let (config, config_path) =
            match resolve_config(&cwd, self.config.as_deref(), overrides) {
                Ok(resolved) => resolved,
                Err(e) => {
                    output::error(&format!("Configuration: {}", e));
                    return Ok(exit_codes::CONFIG_ERROR);
                }
            };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "loaded config");
        }

        let app_folder = config.require_app_folder()?.to_path_buf();

        let report = match cli.format {
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Validating files:"));
                    if let Some(path) = &config_path {
                        output::info(&format!(
                            "Using config {}",
                            output::path_style().apply_to(path.display())
                        ));
                    }
                    println!();
                }

                let report = run_validation(&config, Some(ConsoleSink::new(cli.quiet, cli.verbose)));
                print_text_summary(&report, cli.quiet);
                report
            }
            OutputFormat::Json => {
                let report = run_validation(&config, None::<ConsoleSink>);
                let payload = ValidationOutput {
                    app_folder: &app_folder,
                    config_path: config_path.as_deref(),
                    failed: report.failed,
                    summary: report.summary(),
                    outcomes: &report.outcomes,
                    annotations: &report.annotations,
                };
                println!("{}", serde_json::to_string_pretty(&payload)?);
                // Keep the workflow commands flowing for CI even in JSON mode.
                write_annotations(&mut std::io::stderr().lock(), &report.annotations)?;
                report
            }
        };

        info!(
            failed = report.failed,
            errors = report.summary().errors,
            "validation finished"
        );

        Ok(report.exit_code())
    }
}

fn write_annotations<W: Write>(out: &mut W, annotations: &[Annotation]) -> io::Result<()> {
    for annotation in annotations {
        writeln!(out, "{}", annotation)?;
    }
    Ok(())
}

/// Runs the engine against the local filesystem.
///
/// The config must carry an app folder; an absent one yields an empty report.
fn run_validation<S: ReportSink + 'static>(config: &Config, sink: Option<S>) -> RunReport {
    let mut reporter = Reporter::new(config.ignore.iter().cloned());
    if let Some(sink) = sink {
        reporter = reporter.with_sink(sink);
    }

    if let Some(app_folder) = config.app_folder.as_deref() {
        let fs = LocalFs::new();
        ValidationEngine::new(&fs).run(app_folder, &mut reporter);
    }

    reporter.finish()
}

fn print_text_summary(report: &RunReport, quiet: bool) {
    let summary = report.summary();

    if !quiet {
        println!();
        println!("{}", output::header("Validation finished"));
        println!();
    }

    if report.failed {
        println!(
            "{} with {} error(s)",
            style("✗ Validation failed").red().bold(),
            summary.errors - summary.suppressed
        );
    } else if summary.suppressed > 0 {
        output::success(&format!(
            "Validation passed ({} ignored error(s))",
            summary.suppressed
        ));
    } else if !quiet {
        output::success("All checks passed");
    }
}
