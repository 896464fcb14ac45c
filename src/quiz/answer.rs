use unicode_normalization::UnicodeNormalization;

/// Lowercases, drops all whitespace and strips tone marks: `Nǐ hǎo` → `nihao`.
pub fn normalize_pinyin(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

pub fn pinyin_matches(input: &str, pinyin: &str) -> bool {
    normalize_pinyin(input) == normalize_pinyin(pinyin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_tones_and_spaces() {
        assert_eq!(normalize_pinyin("Nǐ  hǎo"), "nihao");
        assert_eq!(normalize_pinyin("xièxie"), "xiexie");
        assert_eq!(normalize_pinyin("lǜ"), "lu");
        assert_eq!(normalize_pinyin(""), "");
    }

    #[test]
    fn test_pinyin_matches_ignores_tone_marks() {
        assert!(pinyin_matches("ni hao", "nǐ hǎo"));
        assert!(pinyin_matches(" DUÌBUQǏ ", "duìbuqǐ"));
        assert!(!pinyin_matches("ni", "nǐ hǎo"));
    }
}
