//! Text analysis helpers.

/// Reverse the characters of `s`.
///
/// Works on Unicode scalar values, so multi-byte characters stay intact.
/// Combining marks are not kept attached to their base character.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Whitespace as the browser's regular expressions see it. Unlike
/// [`char::is_whitespace`] it includes U+FEFF and excludes NEL (U+0085).
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Count whitespace-separated words.
pub fn word_count(s: &str) -> usize {
    s.split(is_js_whitespace).filter(|w| !w.is_empty()).count()
}

/// Count vowels (a, e, i, o, u), ignoring case.
pub fn vowel_count(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

/// Upper-case form of `s`.
pub fn uppercase(s: &str) -> String {
    s.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("ab cd"), "dc ba");
    }

    #[test]
    fn test_reverse_keeps_astral_chars_whole() {
        assert_eq!(reverse("a😀b"), "b😀a");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("  hello   world  "), 2);
        assert_eq!(word_count("one\ttwo\nthree"), 3);
    }

    #[test]
    fn test_word_count_browser_whitespace() {
        assert_eq!(word_count("a\u{85}b"), 1);
        assert_eq!(word_count("a\u{FEFF}b"), 2);
        assert_eq!(word_count("a\u{A0}b\u{3000}c\u{2028}d"), 4);
        assert_eq!(word_count("\u{FEFF}\u{FEFF}"), 0);
    }

    #[test]
    fn test_vowel_count() {
        assert_eq!(vowel_count("AEIOUaeiou"), 10);
        assert_eq!(vowel_count("xyz"), 0);
        assert_eq!(vowel_count("Hello World"), 3);
        assert_eq!(vowel_count("é"), 0);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(uppercase("Hello, world"), "HELLO, WORLD");
        assert_eq!(uppercase("straße"), "STRASSE");
    }

    proptest! {
        #[test]
        fn prop_reverse_round_trip(s in any::<String>()) {
            prop_assert_eq!(reverse(&reverse(&s)), s);
        }

        #[test]
        fn prop_reverse_preserves_counts(s in "[a-zA-Z ]{0,40}") {
            let r = reverse(&s);
            prop_assert_eq!(vowel_count(&r), vowel_count(&s));
            prop_assert_eq!(word_count(&r), word_count(&s));
        }
    }
}
