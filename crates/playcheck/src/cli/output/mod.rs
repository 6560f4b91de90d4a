//! Output formatting utilities

use console::{style, Style};

use playcheck_metadata::{Annotation, Outcome, OutcomeKind, ReportSink};

/// Width of the status column.
const LABEL_WIDTH: usize = 5;

/// Spaces per nesting level.
const INDENT: usize = 4;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Centers `label` in a column of `width` characters, extra space going right.
pub fn center_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    if len >= width {
        return label.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

/// One report line: `[ label ]    <indent>message`.
pub fn report_line(label: &str, depth: usize, message: &str) -> String {
    format!(
        "[ {} ]    {}{}",
        center_label(label, LABEL_WIDTH),
        " ".repeat(depth * INDENT),
        message
    )
}

fn kind_style(kind: OutcomeKind) -> Style {
    match kind {
        OutcomeKind::Ok => Style::new().green(),
        OutcomeKind::Error => Style::new().red().bold(),
        OutcomeKind::Skipped => Style::new().yellow(),
    }
}

/// Streams a validation run to stdout.
///
/// Annotation lines are written unstyled so CI runners can parse them.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    quiet: bool,
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a console sink.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

impl ReportSink for ConsoleSink {
    fn section(&mut self, depth: usize, text: &str) {
        if !self.quiet {
            println!("{}", report_line("", depth, &header(text)));
        }
    }

    fn outcome(&mut self, outcome: &Outcome) {
        if self.quiet && !outcome.is_failure() {
            return;
        }

        let label = kind_style(outcome.kind)
            .apply_to(center_label(outcome.kind.label(), LABEL_WIDTH));
        let line = format!(
            "[ {} ]    {}{}",
            label,
            " ".repeat(outcome.depth * INDENT),
            outcome.message
        );
        println!("{}", line);

        if self.verbose && outcome.suppressed {
            if let Some(issue) = &outcome.issue {
                println!(
                    "{}",
                    style(report_line(
                        "",
                        outcome.depth + 1,
                        &format!("suppressed '{}': {}", issue.title, issue.message)
                    ))
                    .dim()
                );
            }
        }
    }

    fn annotation(&mut self, annotation: &Annotation) {
        println!();
        println!("{}", annotation);
        println!();
    }
}
