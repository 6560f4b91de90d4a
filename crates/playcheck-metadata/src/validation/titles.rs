//! Error titles.
//!
//! Titles end up in CI annotations and are what users list in `ignore`, so
//! they must stay stable.

pub const INVALID_APP_FOLDER: &str = "Invalid app folder";
pub const MISSING_DEFAULT_LANGUAGE: &str = "Missing default-language.txt";
pub const INVALID_DEFAULT_LANGUAGE: &str = "Invalid default-language.txt";
pub const INVALID_LISTING_LOCALE: &str = "Invalid listing locale";
pub const INVALID_RELEASE_NOTES_LOCALE: &str = "Invalid release-notes locale";
pub const CHANGELOG_TOO_LARGE: &str = "Changelog too large";
pub const UNREADABLE_FOLDER: &str = "Unreadable folder";
pub const UNREADABLE_FILE: &str = "Unreadable file";

/// Title for an oversized listing text file, e.g. `title.txt too large`.
pub fn text_too_large(file_name: &str) -> String {
    format!("{} too large", file_name)
}

/// Title for a graphics folder holding too many images.
pub fn too_many_images(folder: &str) -> String {
    format!("Too many images in {}", folder)
}

/// Title for an image with the wrong size (or that cannot be decoded).
pub fn invalid_image_dimensions(folder: &str) -> String {
    format!("Invalid image dimensions in {}", folder)
}
