//! The validation engine.
//!
//! The engine walks the expected tree top-down, one level per method:
//!
//! - app root ([`ValidationEngine::run`])
//! - source set (default language, listings, release notes)
//! - locale folder
//! - asset (text file, graphics folder, image)
//!
//! Every decision is pushed into the [`Reporter`]. Only a missing app folder
//! stops the walk; everything else is recorded and the walk carries on.

mod common;
mod listings;
mod release_notes;
pub mod titles;

pub use common::{char_count, trim_text, trimmed_char_count};

use std::path::Path;

use tracing::{debug, info};

use crate::fs::{AssetFs, DirEntry};
use crate::layout::{AppLayout, LocaleLayout, SourceSetLayout};
use crate::locales;
use crate::report::Reporter;
use crate::rules::TextRule;

/// Where the Play Console documents its listing languages.
pub const PLAY_LOCALES_URL: &str = "https://support.google.com/googleplay/android-developer/answer/9844778#zippy=%2Cview-list-of-available-languages";

/// Walks an app folder and validates every listing asset in it.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a, F: AssetFs + ?Sized> {
    fs: &'a F,
}

impl<'a, F: AssetFs + ?Sized> ValidationEngine<'a, F> {
    /// Creates an engine reading through `fs`.
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Validates the tree rooted at `app_folder`.
    pub fn run(&self, app_folder: &Path, reporter: &mut Reporter) {
        let app = AppLayout::new(app_folder);
        info!(app_folder = %app.root().display(), "validating app folder");

        if !self.fs.exists(app.root()) {
            reporter.error(
                format!("App folder '{}'", app.root().display()),
                titles::INVALID_APP_FOLDER,
                app.root(),
                format!(
                    "Folder '{}' does not exist. You can change it with the 'appFolder' input variable",
                    app.root().display()
                ),
            );
            return;
        }

        let src = app.src_dir();
        if !self.fs.exists(&src) {
            reporter.skip(format!(
                "No src folder found ({}), is 'appFolder' input correct?",
                src.display()
            ));
            return;
        }

        let Some(source_sets) = self.list_dirs(&src, reporter) else {
            return;
        };
        for entry in source_sets {
            let set = app.source_set(&entry.name, &entry.path);
            self.validate_source_set(&set, reporter);
        }
        info!(failed = reporter.has_failed(), "app folder validated");
    }

    fn validate_source_set(&self, set: &SourceSetLayout, reporter: &mut Reporter) {
        info!(source_set = set.name(), "validating source set");
        reporter.section(&format!("SourceSet '{}':", set.name()));
        reporter.nested(|r| {
            self.validate_default_language(set, r);
            self.validate_listings(set, r);
            self.validate_release_notes(set, r);
        });
    }

    fn validate_default_language(&self, set: &SourceSetLayout, reporter: &mut Reporter) {
        let path = set.default_language();
        let label = "'default-language.txt'";

        if !self.fs.exists(&path) {
            reporter.error(
                label,
                titles::MISSING_DEFAULT_LANGUAGE,
                &path,
                format!(
                    "The file 'default-language.txt' ({}) is missing. It just needs to contain the default locale (for example \"en-US\").",
                    path.display()
                ),
            );
            return;
        }

        match self.fs.read_text(&path) {
            Ok(content) if locales::is_valid(trim_text(&content)) => {
                debug!(locale = trim_text(&content), "default language is valid");
                reporter.ok(label);
            }
            Ok(content) => reporter.error(
                label,
                titles::INVALID_DEFAULT_LANGUAGE,
                &path,
                format!(
                    "The file 'default-language.txt' ({}) contains '{}', which is not a valid Play Store locale: {}",
                    path.display(),
                    trim_text(&content),
                    PLAY_LOCALES_URL
                ),
            ),
            Err(e) => reporter.error(
                label,
                titles::INVALID_DEFAULT_LANGUAGE,
                &path,
                format!(
                    "The file 'default-language.txt' ({}) could not be read: {}",
                    path.display(),
                    e
                ),
            ),
        }
    }

    /// Records whether a locale folder name is a Play Store locale.
    fn validate_locale_tag(&self, locale: &LocaleLayout, title: &str, reporter: &mut Reporter) {
        let label = format!("Locale '{}':", locale.tag());
        if locales::is_valid(locale.tag()) {
            reporter.ok(label);
        } else {
            reporter.error(
                label,
                title,
                locale.dir(),
                format!(
                    "The locale '{}' ({}) is not a valid Play Store locale: {}",
                    locale.tag(),
                    locale.dir().display(),
                    PLAY_LOCALES_URL
                ),
            );
        }
    }

    /// Checks the trimmed length of an existing text file against `rule`.
    fn check_text_length(
        &self,
        path: &Path,
        name: &str,
        rule: &TextRule,
        title: &str,
        reporter: &mut Reporter,
    ) {
        let content = match self.fs.read_text(path) {
            Ok(content) => content,
            Err(e) => {
                reporter.error(
                    format!("'{}': unreadable", name),
                    titles::UNREADABLE_FILE,
                    path,
                    format!("File '{}' ({}) could not be read: {}", name, path.display(), e),
                );
                return;
            }
        };

        let size = trimmed_char_count(&content);
        let label = format!("'{}' length: {}/{}", name, size, rule.max_chars);
        debug!(path = %path.display(), size, limit = rule.max_chars, "checked text length");

        if rule.allows(size) {
            reporter.ok(label);
        } else {
            reporter.error(
                label,
                title,
                path,
                format!(
                    "File '{}' ({}) must be {} or less characters long, current length: {}/{}.",
                    name,
                    path.display(),
                    rule.max_chars,
                    size,
                    rule.max_chars
                ),
            );
        }
    }

    fn list_dirs(&self, path: &Path, reporter: &mut Reporter) -> Option<Vec<DirEntry>> {
        self.listing_or_error(self.fs.list_dirs(path), path, reporter)
    }

    fn list_files(&self, path: &Path, reporter: &mut Reporter) -> Option<Vec<DirEntry>> {
        self.listing_or_error(self.fs.list_files(path), path, reporter)
    }

    fn listing_or_error(
        &self,
        listing: crate::Result<Vec<DirEntry>>,
        path: &Path,
        reporter: &mut Reporter,
    ) -> Option<Vec<DirEntry>> {
        match listing {
            Ok(entries) => Some(entries),
            Err(e) => {
                reporter.error(
                    format!("'{}': unreadable", path.display()),
                    titles::UNREADABLE_FOLDER,
                    path,
                    format!("Folder '{}' could not be read: {}", path.display(), e),
                );
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::report::OutcomeKind;
    use crate::types::Dimensions;
    use crate::MetadataError;

    /// Pretends every path exists but cannot list anything.
    struct UnlistableFs;

    impl AssetFs for UnlistableFs {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn list_dir(&self, path: &Path) -> crate::Result<Vec<DirEntry>> {
            Err(MetadataError::NotFound(path.to_path_buf()))
        }

        fn read_text(&self, path: &Path) -> crate::Result<String> {
            Err(MetadataError::NotFound(path.to_path_buf()))
        }

        fn image_dimensions(&self, path: &Path) -> crate::Result<Dimensions> {
            Err(MetadataError::NotFound(path.to_path_buf()))
        }
    }

    #[test]
    fn test_unlistable_src_is_reported() {
        let mut reporter = Reporter::default();
        ValidationEngine::new(&UnlistableFs).run(Path::new("app"), &mut reporter);
        let report = reporter.finish();

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].title(), Some(titles::UNREADABLE_FOLDER));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_engine_accepts_trait_objects() {
        let fs: &dyn AssetFs = &UnlistableFs;
        let mut reporter = Reporter::default();
        ValidationEngine::new(fs).run(Path::new("app"), &mut reporter);
        assert!(reporter.has_failed());
    }

    #[test]
    fn test_missing_app_folder_stops_run() {
        let fixture = Fixture::new();
        let report = fixture.run(&[]);

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].kind, OutcomeKind::Error);
        assert_eq!(report.outcomes[0].title(), Some(titles::INVALID_APP_FOLDER));
        assert_ne!(report.exit_code(), 0);
    }

    #[test]
    fn test_missing_src_is_skipped() {
        let fixture = Fixture::new();
        fixture.dir("");
        let report = fixture.run(&[]);

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].kind, OutcomeKind::Skipped);
        assert!(report.outcomes[0].message.contains("No src folder found"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_minimal_source_set_passes() {
        let fixture = Fixture::new();
        fixture.source_set("main");
        let report = fixture.run(&[]);

        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            messages(&report),
            vec![
                "'default-language.txt'".to_string(),
                format!(
                    "No listings folder found ({}), skipped",
                    fixture.path("src/main/play/listings").display()
                ),
                format!(
                    "No release-notes folder found ({}), skipped",
                    fixture.path("src/main/play/release-notes").display()
                ),
            ]
        );
        assert!(report.outcomes.iter().all(|o| o.depth == 1));
    }

    #[test]
    fn test_missing_default_language() {
        let fixture = Fixture::new();
        fixture.dir("src/main/play");
        let report = fixture.run(&[]);

        assert_eq!(titles(&report), vec![titles::MISSING_DEFAULT_LANGUAGE]);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_invalid_default_language_does_not_skip_other_checks() {
        let fixture = Fixture::new();
        fixture
            .write("src/main/play/default-language.txt", "xx-ZZ")
            .write("src/main/play/listings/en-US/title.txt", "My App")
            .write("src/main/play/release-notes/en-US/default.txt", "Fixes");
        let report = fixture.run(&[]);

        assert_eq!(titles(&report), vec![titles::INVALID_DEFAULT_LANGUAGE]);
        assert!(messages(&report).contains(&"'title.txt' length: 6/30".to_string()));
        assert!(messages(&report).contains(&"'default.txt' length: 5/500".to_string()));
        let default_language: Vec<_> = report
            .outcomes
            .iter()
            .filter(|o| o.message == "'default-language.txt'")
            .collect();
        assert_eq!(default_language.len(), 1);
    }

    #[test]
    fn test_default_language_is_trimmed() {
        let fixture = Fixture::new();
        fixture.write("src/main/play/default-language.txt", "  de-DE \n");
        let report = fixture.run(&[]);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_suppressed_default_language_keeps_exit_zero() {
        let fixture = Fixture::new();
        fixture.write("src/main/play/default-language.txt", "xx-ZZ");
        let report = fixture.run(&[titles::INVALID_DEFAULT_LANGUAGE]);

        assert_eq!(titles(&report), vec![titles::INVALID_DEFAULT_LANGUAGE]);
        assert!(report.outcomes[0].suppressed);
        assert!(report.annotations.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_source_sets_are_independent_and_ordered() {
        let fixture = Fixture::new();
        fixture
            .source_set("paid")
            .dir("src/free/play")
            .write("src/notes.txt", "not a source set");
        let report = fixture.run(&[]);

        // "free" sorts first and lacks its default language; "paid" is fine.
        assert_eq!(report.errors().count(), 1);
        let error = report.errors().next().unwrap();
        assert!(error.issue.as_ref().unwrap().path.starts_with(fixture.path("src/free")));
        assert_eq!(report.outcomes.len(), 6);
        assert_eq!(report.outcomes[3].kind, OutcomeKind::Ok);
    }

    #[test]
    fn test_full_walk_reports_every_violation() {
        let fixture = Fixture::new();
        // "en-US" sorts before "english".
        fixture
            .write("src/main/play/default-language.txt", "en-US")
            .write("src/main/play/listings/english/title.txt", &"a".repeat(31))
            .image("src/main/play/listings/en-US/graphics/icon/a.png", 10, 10)
            .image("src/main/play/listings/en-US/graphics/icon/b.png", 512, 512)
            .write("src/main/play/release-notes/xx/default.txt", &"b".repeat(501));
        let report = fixture.run(&[]);

        assert_eq!(
            titles(&report),
            vec![
                "Too many images in graphics/icon".to_string(),
                "Invalid image dimensions in graphics/icon".to_string(),
                titles::INVALID_LISTING_LOCALE.to_string(),
                "title.txt too large".to_string(),
                titles::INVALID_RELEASE_NOTES_LOCALE.to_string(),
                titles::CHANGELOG_TOO_LARGE.to_string(),
            ]
        );
        assert_eq!(report.annotations.len(), 6);
        assert_eq!(report.exit_code(), 1);
    }
}
