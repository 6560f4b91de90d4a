//! Outcome collection and CI annotations.
//!
//! The [`Reporter`] is the context object threaded through a validation run.
//! It keeps the ordered outcome list, the display depth, and the single
//! failure flag that decides the exit status.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

/// Classification of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The check passed.
    Ok,
    /// The check failed.
    Error,
    /// The asset is absent, so the check did not run.
    Skipped,
}

impl OutcomeKind {
    /// Short console label.
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Ok => "OK",
            OutcomeKind::Error => "ERROR",
            OutcomeKind::Skipped => "SKIP",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Details attached to an error outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Machine title, also the suppression key.
    pub title: String,
    /// Offending file or folder.
    pub path: PathBuf,
    /// Explanation shown in the annotation.
    pub message: String,
}

/// The result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Pass, fail or skip.
    pub kind: OutcomeKind,
    /// One-line description for the console.
    pub message: String,
    /// Nesting depth at which the outcome was recorded.
    pub depth: usize,
    /// Present exactly for errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<Issue>,
    /// Set when the error title was in the ignore list.
    pub suppressed: bool,
}

impl Outcome {
    /// A passing check.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Ok, message, None)
    }

    /// A check that did not run because the asset is absent.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Skipped, message, None)
    }

    /// A failed check.
    pub fn error(
        message: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<PathBuf>,
        detail: impl Into<String>,
    ) -> Self {
        let issue = Issue {
            title: title.into(),
            path: path.into(),
            message: detail.into(),
        };
        debug_assert!(!issue.title.is_empty(), "error outcomes need a title");
        Self::new(OutcomeKind::Error, message, Some(issue))
    }

    fn new(kind: OutcomeKind, message: impl Into<String>, issue: Option<Issue>) -> Self {
        Self {
            kind,
            message: message.into(),
            depth: 0,
            issue,
            suppressed: false,
        }
    }

    /// Error title, if this is an error.
    pub fn title(&self) -> Option<&str> {
        self.issue.as_ref().map(|i| i.title.as_str())
    }

    /// Returns `true` for errors that were not suppressed.
    pub fn is_failure(&self) -> bool {
        self.kind == OutcomeKind::Error && !self.suppressed
    }
}

/// A GitHub Actions `::error` workflow command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// File the annotation points at.
    pub file: PathBuf,
    /// Annotation title.
    pub title: String,
    /// Annotation body.
    pub message: String,
}

impl Annotation {
    fn from_issue(issue: &Issue) -> Self {
        Self {
            file: issue.path.clone(),
            title: issue.title.clone(),
            message: issue.message.clone(),
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "::error file={},title={}::{}",
            escape_property(&self.file.display().to_string()),
            escape_property(&self.title),
            escape_data(&self.message)
        )
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Receives report events as they happen.
///
/// Every method has an empty default, so a sink only implements what it
/// displays.
pub trait ReportSink {
    /// A heading that groups the outcomes nested below it.
    fn section(&mut self, _depth: usize, _text: &str) {}

    /// A recorded outcome (suppressed errors included).
    fn outcome(&mut self, _outcome: &Outcome) {}

    /// An emitted annotation.
    fn annotation(&mut self, _annotation: &Annotation) {}
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {}

/// Accumulates outcomes for one validation run.
pub struct Reporter {
    ignored: HashSet<String>,
    sink: Box<dyn ReportSink>,
    outcomes: Vec<Outcome>,
    annotations: Vec<Annotation>,
    depth: usize,
    failed: bool,
}

impl Reporter {
    /// Creates a reporter that suppresses errors whose title is in `ignored`.
    pub fn new<I, S>(ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored: ignored.into_iter().map(Into::into).collect(),
            sink: Box::new(NullSink),
            outcomes: Vec::new(),
            annotations: Vec::new(),
            depth: 0,
            failed: false,
        }
    }

    /// Streams events to `sink` as they are recorded.
    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Returns `true` once an unsuppressed error was recorded.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Emits a heading at the current depth.
    pub fn section(&mut self, text: &str) {
        self.sink.section(self.depth, text);
    }

    /// Runs `f` one level deeper.
    pub fn nested<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Records an outcome.
    ///
    /// Errors whose title is ignored are kept in the list but flagged as
    /// suppressed; they neither emit an annotation nor fail the run.
    pub fn record(&mut self, mut outcome: Outcome) {
        outcome.depth = self.depth;

        let mut annotation = None;
        if let Some(issue) = &outcome.issue {
            if self.ignored.contains(&issue.title) {
                debug!(title = %issue.title, path = %issue.path.display(), "error suppressed");
                outcome.suppressed = true;
            } else {
                debug!(title = %issue.title, path = %issue.path.display(), "error recorded");
                self.failed = true;
                annotation = Some(Annotation::from_issue(issue));
            }
        }

        self.sink.outcome(&outcome);
        self.outcomes.push(outcome);

        if let Some(annotation) = annotation {
            self.sink.annotation(&annotation);
            self.annotations.push(annotation);
        }
    }

    /// Records a passing check.
    pub fn ok(&mut self, message: impl Into<String>) {
        self.record(Outcome::ok(message));
    }

    /// Records a skipped check.
    pub fn skip(&mut self, message: impl Into<String>) {
        self.record(Outcome::skipped(message));
    }

    /// Records a failed check.
    pub fn error(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
        path: &Path,
        detail: impl Into<String>,
    ) {
        self.record(Outcome::error(message, title, path, detail));
    }

    /// Ends the run.
    pub fn finish(self) -> RunReport {
        RunReport {
            outcomes: self.outcomes,
            annotations: self.annotations,
            failed: self.failed,
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("ignored", &self.ignored)
            .field("outcomes", &self.outcomes.len())
            .field("depth", &self.depth)
            .field("failed", &self.failed)
            .finish()
    }
}

/// Outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Passing checks.
    pub ok: usize,
    /// Errors, suppressed ones included.
    pub errors: usize,
    /// Skipped checks.
    pub skipped: usize,
    /// Errors dropped by the ignore list.
    pub suppressed: usize,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// All outcomes in traversal order.
    pub outcomes: Vec<Outcome>,
    /// Emitted annotations in order.
    pub annotations: Vec<Annotation>,
    /// Whether any unsuppressed error was recorded.
    pub failed: bool,
}

impl RunReport {
    /// Process exit status: non-zero iff the run failed.
    pub fn exit_code(&self) -> i32 {
        if self.failed {
            1
        } else {
            0
        }
    }

    /// Counts outcomes by kind.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for outcome in &self.outcomes {
            match outcome.kind {
                OutcomeKind::Ok => summary.ok += 1,
                OutcomeKind::Skipped => summary.skipped += 1,
                OutcomeKind::Error => {
                    summary.errors += 1;
                    if outcome.suppressed {
                        summary.suppressed += 1;
                    }
                }
            }
        }
        summary
    }

    /// Error outcomes, suppressed ones included.
    pub fn errors(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes
            .iter()
            .filter(|o| o.kind == OutcomeKind::Error)
    }
}
