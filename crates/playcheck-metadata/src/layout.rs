//! Typed description of the expected asset tree.
//!
//! ```text
//! <app>/src/<sourceSet>/play/
//!     default-language.txt
//!     listings/<locale>/{title,short-description,full-description}.txt
//!     listings/<locale>/graphics/<folder>/*.{png,jpg,jpeg}
//!     release-notes/<locale>/*.txt
//! ```
//!
//! Every path role is derived from position in this tree, never from content.

use std::path::{Path, PathBuf};

use crate::rules::{ImageRule, TextRule};

/// The application root.
#[derive(Debug, Clone)]
pub struct AppLayout {
    root: PathBuf,
}

impl AppLayout {
    /// Describes the tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The application folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding one directory per source set.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Layout of one source set folder.
    pub fn source_set(&self, name: &str, path: &Path) -> SourceSetLayout {
        SourceSetLayout {
            name: name.to_string(),
            play_dir: path.join("play"),
        }
    }
}

/// One `src/<sourceSet>` directory.
#[derive(Debug, Clone)]
pub struct SourceSetLayout {
    name: String,
    play_dir: PathBuf,
}

impl SourceSetLayout {
    /// Source set name (e.g. `main`, `free`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default-language marker file.
    pub fn default_language(&self) -> PathBuf {
        self.play_dir.join("default-language.txt")
    }

    /// Folder of listing locales.
    pub fn listings_dir(&self) -> PathBuf {
        self.play_dir.join("listings")
    }

    /// Folder of release-notes locales.
    pub fn release_notes_dir(&self) -> PathBuf {
        self.play_dir.join("release-notes")
    }
}

/// One `listings/<locale>` or `release-notes/<locale>` directory.
#[derive(Debug, Clone)]
pub struct LocaleLayout {
    tag: String,
    dir: PathBuf,
}

impl LocaleLayout {
    /// Describes the locale folder `dir` named `tag`.
    pub fn new(tag: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            tag: tag.into(),
            dir: dir.into(),
        }
    }

    /// Locale tag taken from the folder name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The locale folder.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Text file governed by `rule`.
    pub fn text_file(&self, rule: &TextRule) -> PathBuf {
        self.dir.join(rule.file_name)
    }

    /// Graphics folder governed by `rule`.
    pub fn graphics_dir(&self, rule: &ImageRule) -> PathBuf {
        self.dir.join("graphics").join(rule.folder_name)
    }
}

/// Relative name of a graphics folder, e.g. `graphics/icon`.
///
/// Uses `/` on every platform since it also appears in error titles.
pub fn graphics_folder(rule: &ImageRule) -> String {
    format!("graphics/{}", rule.folder_name)
}
