//! File system capability used by the validation engine.
//!
//! The engine only ever needs four operations, so they sit behind the
//! [`AssetFs`] trait. [`LocalFs`] is the real implementation; tests and
//! embedders may provide their own.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::trace;

use crate::types::Dimensions;
use crate::{MetadataError, Result};

/// Whether a directory entry is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry.
    pub name: String,
    /// Full path of the entry.
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Returns `true` for directories.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Returns `true` for regular files.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Read-only access to the asset tree.
pub trait AssetFs {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the files and folders directly inside `path`, sorted by name.
    ///
    /// Entries that are neither files nor folders are left out.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Reads a text file as UTF-8.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Probes the pixel size of an image.
    fn image_dimensions(&self, path: &Path) -> Result<Dimensions>;

    /// Lists only the sub-folders of `path`.
    fn list_dirs(&self, path: &Path) -> Result<Vec<DirEntry>> {
        Ok(self.list_dir(path)?.into_iter().filter(DirEntry::is_dir).collect())
    }

    /// Lists only the files of `path`.
    fn list_files(&self, path: &Path) -> Result<Vec<DirEntry>> {
        Ok(self
            .list_dir(path)?
            .into_iter()
            .filter(DirEntry::is_file)
            .collect())
    }
}

/// [`AssetFs`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Creates a new local file system accessor.
    pub fn new() -> Self {
        Self
    }
}

impl AssetFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // Symlinks are not followed; only real files and folders count.
            let file_type = entry.file_type()?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        trace!(path = %path.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Undecodable bytes are replaced rather than rejected.
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Sniffs the format from the file's bytes, so the extension does not
    /// have to match the content. Only the header is read.
    fn image_dimensions(&self, path: &Path) -> Result<Dimensions> {
        let decode_error = |message: String| MetadataError::ImageDecode {
            path: path.to_path_buf(),
            message,
        };
        let reader = image::ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| decode_error(e.to_string()))?;
        Ok(Dimensions::new(width, height))
    }
}
