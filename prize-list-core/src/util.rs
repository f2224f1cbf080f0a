use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Ellipsis appended to truncated descriptions.
pub const ELLIPSIS: char = '…';

/// Derive the base slug for a title: lowercase, keeping only `[a-z0-9]`.
///
/// Runs of any other character (spaces, punctuation, non-ASCII letters)
/// are dropped entirely, so "Return of the Obra Dinn!" becomes
/// "returnoftheobradinn". Callers disambiguate collisions.
pub fn slug_base(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Truncate `s` to `max` characters plus an ellipsis.
///
/// Returns `None` when `s` already fits, which the view uses to decide
/// whether a "show more" affordance is needed. Length is counted in
/// Unicode scalar values, never bytes.
pub fn truncate_chars(s: &str, max: usize) -> Option<String> {
    let mut indices = s.char_indices();
    let (cut, _) = indices.nth(max)?;
    let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
    out.push_str(&s[..cut]);
    out.push(ELLIPSIS);
    Some(out)
}

/// Compare two display strings the way a browser's default collation would
/// for Latin text.
///
/// Strings are compared in NFD form at three levels:
///
/// 1. Base letters, ignoring accents and case. Whitespace and punctuation
///    sort before digits, digits before letters.
/// 2. Accents: an unaccented letter sorts before its accented forms.
/// 3. Case: lowercase before uppercase.
///
/// Ties after that fall back to code point order so the result is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_chars(a)
        .map(primary_weight)
        .cmp(base_chars(b).map(primary_weight))
        .then_with(|| accent_weights(a).cmp(accent_weights(b)))
        .then_with(|| {
            base_chars(a)
                .map(char::is_uppercase)
                .cmp(base_chars(b).map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|&c| !is_combining_mark(c))
}

/// Decomposed, lowercased text with accents kept.
fn accent_weights(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_base() {
        assert_eq!(slug_base("Return of Obra Studios"), "returnofobrastudios");
        assert_eq!(slug_base("FTL: Faster Than Light"), "ftlfasterthanlight");
        assert_eq!(slug_base("Half-Life 2"), "halflife2");
        assert_eq!(slug_base("Café Owner"), "cafowner");
        assert_eq!(slug_base("!!!"), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 150), None);
        assert_eq!(truncate_chars("abcdef", 6), None);
        assert_eq!(truncate_chars("abcdefg", 6), Some("abcdef…".to_string()));
        assert_eq!(truncate_chars("ééééé", 3), Some("ééé…".to_string()));
    }

    #[test]
    fn test_truncate_boundary_at_150() {
        let exact = "x".repeat(150);
        assert_eq!(truncate_chars(&exact, 150), None);

        let over = "x".repeat(151);
        let truncated = truncate_chars(&over, 150).unwrap();
        assert_eq!(truncated.chars().count(), 151);
        assert!(truncated.ends_with(ELLIPSIS));
        assert!(truncated.starts_with(&exact));
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_lowercase_before_uppercase() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Portal", "portal"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_punctuation_and_digits_first() {
        assert_eq!(locale_compare(" z", "a"), Ordering::Less);
        assert_eq!(locale_compare("2048", "Abzu"), Ordering::Less);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_accents_sort_with_base_letter() {
        assert_eq!(locale_compare("Éclair", "Far Cry"), Ordering::Less);
        assert_eq!(locale_compare("Éclair", "Dune"), Ordering::Greater);
        assert_eq!(locale_compare("Ōkami", "Portal"), Ordering::Less);
        assert_eq!(locale_compare("Ōkami", "Zoo"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_unaccented_before_accented() {
        assert_eq!(locale_compare("Eclair", "éclair"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("éclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_prefix_sorts_first() {
        assert_eq!(locale_compare("Portal", "Portal 2"), Ordering::Less);
    }
}
