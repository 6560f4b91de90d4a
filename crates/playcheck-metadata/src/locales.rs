//! Google Play listing locales.
//!
//! The list mirrors the languages accepted by the Play Console for store
//! listings. Tags are compared verbatim: no case folding, no BCP 47
//! canonicalization. Note that Play still uses legacy codes such as `iw-IL`.

/// Every locale tag the Play Console accepts for a store listing.
///
/// Source: <https://support.google.com/googleplay/android-developer/answer/9844778>
pub const GOOGLE_PLAY_LOCALES: &[&str] = &[
    "af", "sq", "am", "ar", "hy-AM", "az-AZ", "bn-BD", "eu-ES", "be", "bg", "my-MM", "ca",
    "zh-HK", "zh-CN", "zh-TW", "hr", "cs-CZ", "da-DK", "nl-NL", "en-IN", "en-SG", "en-ZA",
    "en-AU", "en-CA", "en-GB", "en-US", "et", "fil", "fi-FI", "fr-CA", "fr-FR", "gl-ES", "ka-GE",
    "de-DE", "el-GR", "gu", "iw-IL", "hi-IN", "hu-HU", "is-IS", "id", "it-IT", "ja-JP", "kn-IN",
    "kk", "km-KH", "ko-KR", "ky-KG", "lo-LA", "lv", "lt", "mk-MK", "ms", "ms-MY", "ml-IN",
    "mr-IN", "mn-MN", "ne-NP", "no-NO", "fa", "fa-AE", "fa-AF", "fa-IR", "pl-PL", "pt-BR",
    "pt-PT", "pa", "ro", "rm", "ru-RU", "sr", "si-LK", "sk", "sl", "es-419", "es-ES", "es-US",
    "sw", "sv-SE", "ta-IN", "te-IN", "th", "tr-TR", "uk", "ur", "vi", "zu",
];

/// Returns `true` if `tag` is a Play Store listing locale.
pub fn is_valid(tag: &str) -> bool {
    GOOGLE_PLAY_LOCALES.contains(&tag)
}

/// All accepted locale tags, in Play Console order.
pub fn all() -> &'static [&'static str] {
    GOOGLE_PLAY_LOCALES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_listed_tag_is_valid() {
        for tag in GOOGLE_PLAY_LOCALES {
            assert!(is_valid(tag), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_catalog_size_and_uniqueness() {
        let unique: HashSet<_> = GOOGLE_PLAY_LOCALES.iter().collect();
        assert_eq!(GOOGLE_PLAY_LOCALES.len(), 87);
        assert_eq!(unique.len(), GOOGLE_PLAY_LOCALES.len());
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(is_valid("en-US"));
        assert!(!is_valid("en-us"));
        assert!(!is_valid("EN-US"));
        assert!(!is_valid("en_US"));
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_valid(" en-US"));
        assert!(!is_valid("he-IL")); // Play uses the legacy iw-IL
        assert!(is_valid("iw-IL"));
        assert!(!is_valid("en"));
        assert!(!is_valid("xx-ZZ"));
        assert!(!is_valid(""));
    }
}
