//! Google Play listing asset validation for playcheck.
//!
//! This crate walks a Gradle Play Publisher style asset tree
//! (`<app>/src/<sourceSet>/play/...`) and checks every locale, text field and
//! graphics folder it finds against the Play Console limits.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use playcheck_metadata::{LocalFs, Reporter, ValidationEngine};
//!
//! let fs = LocalFs::new();
//! let mut reporter = Reporter::new(["Invalid listing locale"]);
//! ValidationEngine::new(&fs).run(Path::new("app"), &mut reporter);
//!
//! let report = reporter.finish();
//! std::process::exit(report.exit_code());
//! ```

pub mod error;
pub mod fs;
pub mod layout;
pub mod locales;
pub mod report;
pub mod rules;
pub mod types;
pub mod validation;

pub use error::MetadataError;
pub use fs::{AssetFs, DirEntry, EntryKind, LocalFs};
pub use report::{
    Annotation, Issue, Outcome, OutcomeKind, ReportSink, Reporter, RunReport, RunSummary,
};
pub use rules::{DimensionRange, ImageRule, TextRule};
pub use types::Dimensions;
pub use validation::ValidationEngine;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
