//! Case folding and containment checks shared by every matcher.
//!
//! Containment is the only similarity measure in the service: a user string
//! matches a catalog keyword when one contains the other after folding.

/// Folds a string for comparison: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// True when `needle` occurs in `haystack` after both are normalized.
/// An empty needle is contained in every haystack.
pub fn contains_keyword(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// True when `needle` is contained in at least one entry of `haystacks`.
pub fn any_contains<S: AsRef<str>>(haystacks: &[S], needle: &str) -> bool {
    haystacks
        .iter()
        .any(|h| contains_keyword(h.as_ref(), needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_folds() {
        assert_eq!(normalize("  JavaScript \n"), "javascript");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_contains_keyword_is_case_insensitive() {
        assert!(contains_keyword("Advanced JavaScript", "javascript"));
        assert!(contains_keyword("python", " PYTHON "));
        assert!(!contains_keyword("java", "javascript"));
    }

    #[test]
    fn test_contains_keyword_is_total() {
        assert!(contains_keyword("", ""));
        assert!(contains_keyword("anything", ""));
        assert!(!contains_keyword("", "x"));
    }

    #[test]
    fn test_any_contains() {
        let skills = vec!["HTML5".to_string(), "css".to_string()];
        assert!(any_contains(&skills, "html"));
        assert!(!any_contains(&skills, "python"));
        assert!(!any_contains::<String>(&[], "python"));
    }
}
