//! Release notes checks.

use tracing::debug;

use crate::fs::AssetFs;
use crate::layout::{LocaleLayout, SourceSetLayout};
use crate::report::Reporter;
use crate::rules::{is_release_notes_file, RELEASE_NOTES_RULE};

use super::{titles, ValidationEngine};

impl<'a, F: AssetFs + ?Sized> ValidationEngine<'a, F> {
    /// Every `*.txt` file in a locale folder is a release note and gets the
    /// same limit, whatever its name (track name or `default`).
    pub(super) fn validate_release_notes(&self, set: &SourceSetLayout, reporter: &mut Reporter) {
        let dir = set.release_notes_dir();
        if !self.fs.exists(&dir) {
            reporter.skip(format!(
                "No release-notes folder found ({}), skipped",
                dir.display()
            ));
            return;
        }

        let Some(entries) = self.list_dirs(&dir, reporter) else {
            return;
        };
        for entry in entries {
            let locale = LocaleLayout::new(entry.name, entry.path);
            debug!(locale = locale.tag(), "validating release notes locale");

            self.validate_locale_tag(&locale, titles::INVALID_RELEASE_NOTES_LOCALE, reporter);
            reporter.nested(|r| {
                let Some(files) = self.list_files(locale.dir(), r) else {
                    return;
                };
                for file in files.iter().filter(|f| is_release_notes_file(&f.name)) {
                    self.check_text_length(
                        &file.path,
                        &file.name,
                        &RELEASE_NOTES_RULE,
                        titles::CHANGELOG_TOO_LARGE,
                        r,
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::report::OutcomeKind;
    use crate::validation::titles;

    #[test]
    fn test_every_txt_file_is_checked() {
        let fixture = Fixture::new();
        fixture
            .source_set("main")
            .write("src/main/play/release-notes/en-US/default.txt", &"a".repeat(500))
            .write("src/main/play/release-notes/en-US/beta.txt", &"a".repeat(501))
            .write("src/main/play/release-notes/en-US/README.md", &"a".repeat(900));
        let report = fixture.run(&[]);

        assert_eq!(titles(&report), vec![titles::CHANGELOG_TOO_LARGE]);
        let checked: Vec<_> = messages(&report)
            .into_iter()
            .filter(|m| m.contains("length:"))
            .collect();
        assert_eq!(
            checked,
            vec!["'beta.txt' length: 501/500", "'default.txt' length: 500/500"]
        );
    }

    #[test]
    fn test_invalid_release_notes_locale() {
        let fixture = Fixture::new();
        fixture
            .source_set("main")
            .write("src/main/play/release-notes/en_US/default.txt", "Fixes");
        let report = fixture.run(&[]);

        assert_eq!(titles(&report), vec![titles::INVALID_RELEASE_NOTES_LOCALE]);
        assert!(messages(&report).contains(&"'default.txt' length: 5/500".to_string()));
    }

    #[test]
    fn test_empty_locale_has_no_skip() {
        let fixture = Fixture::new();
        fixture
            .source_set("main")
            .dir("src/main/play/release-notes/en-US");
        let report = fixture.run(&[]);

        let last = report.outcomes.last().unwrap();
        assert_eq!(last.kind, OutcomeKind::Ok);
        assert_eq!(last.message, "Locale 'en-US':");
    }

    #[test]
    fn test_suppressed_changelog() {
        let fixture = Fixture::new();
        fixture
            .source_set("main")
            .write("src/main/play/release-notes/en-US/default.txt", &"a".repeat(600));
        let report = fixture.run(&[titles::CHANGELOG_TOO_LARGE]);

        assert_eq!(report.exit_code(), 0);
        assert!(report.annotations.is_empty());
        assert_eq!(report.summary().suppressed, 1);
    }
}
