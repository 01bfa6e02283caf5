//! Unicode normalization for phrases and passphrases.

use unicode_normalization::UnicodeNormalization;

/// Apply Unicode compatibility decomposition (NFKD) to `text`.
///
/// Precomposed characters are split into base letters plus combining marks,
/// and compatibility characters are replaced by their plain equivalents
/// (U+3000 IDEOGRAPHIC SPACE becomes an ASCII space).
pub fn normalize_string(text: &str) -> String {
    text.nfkd().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposes_precomposed_letters() {
        assert_eq!(normalize_string("\u{e1}"), "a\u{301}");
        assert_eq!(normalize_string("P\u{159}\u{ed}"), "Pr\u{30c}i\u{301}");
    }

    #[test]
    fn test_already_decomposed_is_unchanged() {
        let nfd = "Pr\u{30c}i\u{301}s\u{30c}erne\u{30c}";
        assert_eq!(normalize_string(nfd), nfd);
    }

    #[test]
    fn test_ideographic_space_becomes_ascii() {
        assert_eq!(normalize_string("a\u{3000}b"), "a b");
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize_string("abandon about"), "abandon about");
        assert_eq!(normalize_string(""), "");
    }
}
