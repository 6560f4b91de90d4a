//! Declarative rule tables for listing assets.
//!
//! The engine iterates these tables in declaration order; the order only
//! affects how the report reads, never whether a check passes.

use serde::Serialize;

use crate::types::Dimensions;

/// Maximum length of a trimmed text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRule {
    /// File name relative to the locale folder.
    pub file_name: &'static str,
    /// Character ceiling (inclusive).
    pub max_chars: usize,
}

impl TextRule {
    /// Returns `true` if a text of `len` characters satisfies the rule.
    pub fn allows(&self, len: usize) -> bool {
        len <= self.max_chars
    }
}

/// Accepted values for one image axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionRange {
    /// The value must equal this exactly.
    Exact(u32),
    /// The value must lie within these bounds, both inclusive.
    Between(u32, u32),
}

impl DimensionRange {
    /// Returns `true` if `value` is accepted.
    pub fn contains(&self, value: u32) -> bool {
        match *self {
            DimensionRange::Exact(expected) => value == expected,
            DimensionRange::Between(lo, hi) => lo <= value && value <= hi,
        }
    }
}

impl std::fmt::Display for DimensionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionRange::Exact(expected) => write!(f, "{}", expected),
            DimensionRange::Between(lo, hi) => write!(f, "{}-{}", lo, hi),
        }
    }
}

/// Count and size limits for one `graphics/<folder>` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRule {
    /// Folder name under `graphics/`.
    pub folder_name: &'static str,
    /// Maximum number of images in the folder.
    pub max_count: usize,
    /// Accepted widths.
    pub width: DimensionRange,
    /// Accepted heights.
    pub height: DimensionRange,
}

impl ImageRule {
    /// Returns `true` if `count` images are allowed. An empty folder always passes.
    pub fn allows_count(&self, count: usize) -> bool {
        count <= self.max_count
    }

    /// Returns `true` if an image of the given size is allowed.
    pub fn allows_dimensions(&self, dims: Dimensions) -> bool {
        self.width.contains(dims.width) && self.height.contains(dims.height)
    }

    /// Human-readable form of the size constraint, e.g. `512 x 512`.
    pub fn expected_dimensions(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// File extensions recognized as images (matched case-sensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extension of release-note files.
pub const RELEASE_NOTES_EXTENSION: &str = ".txt";

/// Store listing text limits.
pub const LISTING_TEXT_RULES: &[TextRule] = &[
    TextRule {
        file_name: "title.txt",
        max_chars: 30,
    },
    TextRule {
        file_name: "short-description.txt",
        max_chars: 80,
    },
    TextRule {
        file_name: "full-description.txt",
        max_chars: 4000,
    },
];

/// Limit applied to every release-notes file, whatever its name.
pub const RELEASE_NOTES_RULE: TextRule = TextRule {
    file_name: "*.txt",
    max_chars: 500,
};

const SCREENSHOT: DimensionRange = DimensionRange::Between(320, 3840);

/// Graphics folder limits.
pub const IMAGE_RULES: &[ImageRule] = &[
    ImageRule {
        folder_name: "icon",
        max_count: 1,
        width: DimensionRange::Exact(512),
        height: DimensionRange::Exact(512),
    },
    ImageRule {
        folder_name: "feature-graphic",
        max_count: 1,
        width: DimensionRange::Exact(1024),
        height: DimensionRange::Exact(500),
    },
    ImageRule {
        folder_name: "phone-screenshots",
        max_count: 8,
        width: SCREENSHOT,
        height: SCREENSHOT,
    },
    ImageRule {
        folder_name: "tablet-screenshots",
        max_count: 8,
        width: SCREENSHOT,
        height: SCREENSHOT,
    },
    ImageRule {
        folder_name: "large-tablet-screenshots",
        max_count: 8,
        width: DimensionRange::Between(1080, 7680),
        height: DimensionRange::Between(1080, 7680),
    },
    ImageRule {
        folder_name: "tv-banner",
        max_count: 1,
        width: DimensionRange::Exact(1280),
        height: DimensionRange::Exact(720),
    },
    ImageRule {
        folder_name: "tv-screenshots",
        max_count: 8,
        width: SCREENSHOT,
        height: SCREENSHOT,
    },
    ImageRule {
        folder_name: "wear-screenshots",
        max_count: 8,
        width: DimensionRange::Between(384, 3840),
        height: DimensionRange::Between(384, 3840),
    },
];

/// Returns `true` if `file_name` has one of the [`IMAGE_EXTENSIONS`].
pub fn is_image_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && IMAGE_EXTENSIONS.contains(&ext))
}

/// Returns `true` if `file_name` is a release-notes file.
pub fn is_release_notes_file(file_name: &str) -> bool {
    file_name.ends_with(RELEASE_NOTES_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_text_order() {
        let names: Vec<_> = LISTING_TEXT_RULES.iter().map(|r| r.file_name).collect();
        assert_eq!(
            names,
            vec!["title.txt", "short-description.txt", "full-description.txt"]
        );
    }

    #[test]
    fn test_image_rule_order() {
        let names: Vec<_> = IMAGE_RULES.iter().map(|r| r.folder_name).collect();
        assert_eq!(
            names,
            vec![
                "icon",
                "feature-graphic",
                "phone-screenshots",
                "tablet-screenshots",
                "large-tablet-screenshots",
                "tv-banner",
                "tv-screenshots",
                "wear-screenshots",
            ]
        );
    }

    #[test]
    fn test_text_limit_boundary() {
        let rule = LISTING_TEXT_RULES[0];
        assert!(rule.allows(0));
        assert!(rule.allows(30));
        assert!(!rule.allows(31));
        assert!(RELEASE_NOTES_RULE.allows(500));
        assert!(!RELEASE_NOTES_RULE.allows(501));
    }

    #[test]
    fn test_exact_range() {
        let range = DimensionRange::Exact(512);
        assert!(range.contains(512));
        assert!(!range.contains(511));
        assert!(!range.contains(513));
    }

    #[test]
    fn test_between_range_is_inclusive() {
        let range = DimensionRange::Between(320, 3840);
        assert!(range.contains(320));
        assert!(range.contains(3840));
        assert!(range.contains(1080));
        assert!(!range.contains(319));
        assert!(!range.contains(3841));
    }

    #[test]
    fn test_count_rule() {
        let icon = IMAGE_RULES[0];
        assert!(icon.allows_count(0));
        assert!(icon.allows_count(1));
        assert!(!icon.allows_count(2));
    }

    #[test]
    fn test_dimensions_checked_per_axis() {
        let feature = IMAGE_RULES[1];
        assert!(feature.allows_dimensions(Dimensions::new(1024, 500)));
        assert!(!feature.allows_dimensions(Dimensions::new(500, 1024)));
        assert_eq!(feature.expected_dimensions(), "1024 x 500");

        let phone = IMAGE_RULES[2];
        assert!(phone.allows_dimensions(Dimensions::new(1080, 1920)));
        assert!(!phone.allows_dimensions(Dimensions::new(1080, 4000)));
        assert_eq!(phone.expected_dimensions(), "320-3840 x 320-3840");
    }

    #[test]
    fn test_image_extensions_are_case_sensitive() {
        assert!(is_image_file("1.png"));
        assert!(is_image_file("shot.jpg"));
        assert!(is_image_file("shot.jpeg"));
        assert!(!is_image_file("shot.PNG"));
        assert!(!is_image_file("shot.webp"));
        assert!(!is_image_file("png"));
        assert!(!is_image_file(".png"));
    }

    #[test]
    fn test_release_notes_file() {
        assert!(is_release_notes_file("default.txt"));
        assert!(is_release_notes_file("internal.txt"));
        assert!(!is_release_notes_file("notes.md"));
    }
}
