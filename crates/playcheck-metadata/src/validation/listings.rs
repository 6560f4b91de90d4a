//! Store listing checks: locale folders, text fields and graphics.

use tracing::debug;

use crate::fs::{AssetFs, DirEntry};
use crate::layout::{graphics_folder, LocaleLayout, SourceSetLayout};
use crate::report::Reporter;
use crate::rules::{is_image_file, ImageRule, TextRule, IMAGE_RULES, LISTING_TEXT_RULES};

use super::{titles, ValidationEngine};

impl<'a, F: AssetFs + ?Sized> ValidationEngine<'a, F> {
    pub(super) fn validate_listings(&self, set: &SourceSetLayout, reporter: &mut Reporter) {
        let dir = set.listings_dir();
        if !self.fs.exists(&dir) {
            reporter.skip(format!("No listings folder found ({}), skipped", dir.display()));
            return;
        }

        let Some(entries) = self.list_dirs(&dir, reporter) else {
            return;
        };
        for entry in entries {
            let locale = LocaleLayout::new(entry.name, entry.path);
            debug!(locale = locale.tag(), "validating listing locale");

            // An invalid tag is reported, but its assets are still checked.
            self.validate_locale_tag(&locale, titles::INVALID_LISTING_LOCALE, reporter);
            reporter.nested(|r| {
                for rule in LISTING_TEXT_RULES {
                    self.validate_listing_text(&locale, rule, r);
                }
                for rule in IMAGE_RULES {
                    self.validate_graphics(&locale, rule, r);
                }
            });
        }
    }

    fn validate_listing_text(
        &self,
        locale: &LocaleLayout,
        rule: &TextRule,
        reporter: &mut Reporter,
    ) {
        let path = locale.text_file(rule);
        if !self.fs.exists(&path) {
            reporter.skip(format!("'{}': not found, skipped", rule.file_name));
            return;
        }
        self.check_text_length(
            &path,
            rule.file_name,
            rule,
            &titles::text_too_large(rule.file_name),
            reporter,
        );
    }

    /// Count check for the folder, then one size check per image.
    ///
    /// The two are independent: a folder with too many images still gets
    /// every image measured.
    fn validate_graphics(
        &self,
        locale: &LocaleLayout,
        rule: &ImageRule,
        reporter: &mut Reporter,
    ) {
        let folder = graphics_folder(rule);
        let dir = locale.graphics_dir(rule);
        if !self.fs.exists(&dir) {
            reporter.skip(format!("'{}': not found, skipped", folder));
            return;
        }

        let Some(files) = self.list_files(&dir, reporter) else {
            return;
        };
        let images: Vec<DirEntry> = files
            .into_iter()
            .filter(|f| is_image_file(&f.name))
            .collect();

        let label = format!("'{}' images: {}/{}", folder, images.len(), rule.max_count);
        if rule.allows_count(images.len()) {
            reporter.ok(label);
        } else {
            reporter.error(
                label,
                titles::too_many_images(&folder),
                &dir,
                format!(
                    "Folder '{}' ({}) must contain {} or less images, current count: {}.",
                    folder,
                    dir.display(),
                    rule.max_count,
                    images.len()
                ),
            );
        }

        reporter.nested(|r| {
            for image in &images {
                self.validate_image(image, rule, &folder, r);
            }
        });
    }

    fn validate_image(
        &self,
        image: &DirEntry,
        rule: &ImageRule,
        folder: &str,
        reporter: &mut Reporter,
    ) {
        let title = titles::invalid_image_dimensions(folder);
        match self.fs.image_dimensions(&image.path) {
            Ok(dims) if rule.allows_dimensions(dims) => {
                reporter.ok(format!("'{}' dimensions: {}", image.name, dims));
            }
            Ok(dims) => reporter.error(
                format!(
                    "'{}' dimensions: {}, expected {}",
                    image.name,
                    dims,
                    rule.expected_dimensions()
                ),
                title,
                &image.path,
                format!(
                    "Image '{}' ({}) is {} pixels, but images in '{}' must be {} pixels (width x height).",
                    image.name,
                    image.path.display(),
                    dims,
                    folder,
                    rule.expected_dimensions()
                ),
            ),
            Err(e) => reporter.error(
                format!("'{}': not a readable image", image.name),
                title,
                &image.path,
                format!(
                    "Image '{}' ({}) could not be measured: {}",
                    image.name,
                    image.path.display(),
                    e
                ),
            ),
        }
    }
}
