//! Text helpers shared by the text checks.

/// Trims whitespace (and a byte-order mark) from both ends.
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Counts the number of characters in a string.
///
/// Length is measured in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane (most emoji) count as two.
pub fn char_count(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Character count of the trimmed text.
pub fn trimmed_char_count(value: &str) -> usize {
    char_count(trim_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text("  en-US \n"), "en-US");
        assert_eq!(trim_text("\u{feff}en-US\r\n"), "en-US");
        assert_eq!(trim_text("a  b"), "a  b");
    }

    #[test]
    fn test_char_count_unicode() {
        assert_eq!(char_count("Hello"), 5);
        assert_eq!(char_count("日本語"), 3);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn test_char_count_surrogate_pairs() {
        assert_eq!(char_count("\u{1F600}"), 2);
        assert_eq!(char_count("ok \u{1F680}"), 5);
    }

    #[test]
    fn test_trimmed_char_count() {
        assert_eq!(trimmed_char_count("\n  My App  \n"), 6);
        assert_eq!(trimmed_char_count("   "), 0);
    }
}
