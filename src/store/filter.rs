//! Search predicate over author records.
//!
//! [`matches`] is a pure function: it knows nothing about debouncing or about
//! which records are currently shown. Keystroke coalescing happens at the
//! event boundary in [`crate::app::debounce`].

use crate::domain::AuthorRecord;

/// Returns `true` when `record` satisfies the search `query`.
///
/// The query is trimmed and compared case-insensitively as a substring of the
/// author name or, when present, the biography. An empty query matches every
/// record.
///
/// # Examples
///
/// ```
/// use authorgrid::domain::AuthorRecord;
/// use authorgrid::store::matches;
///
/// let record = AuthorRecord::new("Quincy Larson", "", "", Some("Educator".to_string()));
/// assert!(matches("", &record));
/// assert!(matches("  LARSON ", &record));
/// assert!(matches("educ", &record));
/// assert!(!matches("rust", &record));
/// ```
#[must_use]
pub fn matches(query: &str, record: &AuthorRecord) -> bool {
    let needle = normalize_query(query);
    matches_normalized(&needle, record)
}

/// Lowercased, trimmed form of a query as used for comparison.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Same as [`matches`] for a query already passed through [`normalize_query`].
pub(crate) fn matches_normalized(needle: &str, record: &AuthorRecord) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.author.to_lowercase().contains(needle)
        || record
            .bio
            .as_deref()
            .is_some_and(|bio| bio.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, bio: Option<&str>) -> AuthorRecord {
        AuthorRecord::new(author, "", "", bio.map(str::to_string))
    }

    #[test]
    fn empty_and_blank_queries_match_everything() {
        let r = record("Ada", None);
        assert!(matches("", &r));
        assert!(matches("   ", &r));
    }

    #[test]
    fn null_bio_never_matches_on_bio() {
        let r = record("Ada", None);
        assert!(!matches("writer", &r));
    }

    #[test]
    fn matches_unicode_case_insensitively() {
        let r = record("Élodie Durand", Some("Écrivaine"));
        assert!(matches("élodie", &r));
        assert!(matches("ÉCRIV", &r));
    }
}
