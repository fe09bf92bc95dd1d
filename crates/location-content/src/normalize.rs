//! Slug normalization rules for location lookups
//!
//! Every place that turns user- or data-supplied text into a registry key goes
//! through this module, so the fallback behavior stays in one spot.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Apostrophe variants removed from display names
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Remove every hyphen from a key ("st-petersburg" -> "stpetersburg")
pub fn strip_hyphens(key: &str) -> String {
    key.replace('-', "")
}

/// Convert a display name into a slug candidate
///
/// Lowercases, collapses whitespace runs into a single hyphen and drops
/// apostrophes. Punctuation other than apostrophes is left alone, so
/// "St. Petersburg" becomes "st.-petersburg".
pub fn name_to_slug(name: &str) -> String {
    let lower = name.to_lowercase();
    WHITESPACE_RUN
        .replace_all(&lower, "-")
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .collect()
}

/// Check that a slug is non-empty lowercase ASCII letters, digits and hyphens
pub fn is_canonical_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hyphens_removes_all() {
        assert_eq!(strip_hyphens("st-petersburg"), "stpetersburg");
        assert_eq!(strip_hyphens("town-n-country"), "townncountry");
        assert_eq!(strip_hyphens("tampa"), "tampa");
    }

    #[test]
    fn test_name_to_slug_handles_apostrophes() {
        assert_eq!(name_to_slug("Town 'n' Country"), "town-n-country");
        assert_eq!(name_to_slug("Land O\u{2019} Lakes"), "land-o-lakes");
    }

    #[test]
    fn test_name_to_slug_collapses_whitespace() {
        assert_eq!(name_to_slug("Temple   Terrace"), "temple-terrace");
        assert_eq!(name_to_slug("Wesley\tChapel"), "wesley-chapel");
    }

    #[test]
    fn test_name_to_slug_keeps_periods() {
        assert_eq!(name_to_slug("St. Petersburg"), "st.-petersburg");
    }

    #[test]
    fn test_canonical_slug_rules() {
        assert!(is_canonical_slug("st-petersburg"));
        assert!(is_canonical_slug("town-n-country"));
        assert!(!is_canonical_slug(""));
        assert!(!is_canonical_slug("St-Petersburg"));
        assert!(!is_canonical_slug("st petersburg"));
        assert!(!is_canonical_slug("-tampa"));
    }
}
