//! In-memory author store holding the fetched records and the filtered view.
//!
//! The store is pure data. It never performs I/O and is mutated only by the
//! event handler. The filtered view is always recomputed wholesale from the
//! full record set and the current query; it is never patched incrementally.

use crate::domain::AuthorRecord;
use crate::store::filter::{matches_normalized, normalize_query};

/// Full record set plus the filtered view derived from the active query.
///
/// # Invariants
///
/// - `all` is in server order
/// - `filtered` is a subsequence of `all` with the same relative order
/// - `filtered == all.filter(matches(query))` after every mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorStore {
    all: Vec<AuthorRecord>,
    filtered: Vec<AuthorRecord>,
    query: String,
}

impl AuthorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record set with a fresh fetch result.
    ///
    /// The filtered view becomes the full set and any stale query is cleared.
    pub fn replace_all(&mut self, records: Vec<AuthorRecord>) {
        let _span = tracing::debug_span!("replace_all", record_count = records.len()).entered();

        self.filtered.clone_from(&records);
        self.all = records;
        self.query.clear();
    }

    /// Recomputes the filtered view for `query`.
    ///
    /// The query is trimmed before it is stored. An empty query restores the
    /// full record set.
    pub fn apply_filter(&mut self, query: &str) {
        let _span = tracing::debug_span!("apply_filter",
            total = self.all.len(),
            query_len = query.len()
        )
        .entered();

        let needle = normalize_query(query);
        self.filtered = self
            .all
            .iter()
            .filter(|record| matches_normalized(&needle, record))
            .cloned()
            .collect();
        query.trim().clone_into(&mut self.query);

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    #[must_use]
    pub fn all(&self) -> &[AuthorRecord] {
        &self.all
    }

    #[must_use]
    pub fn filtered(&self) -> &[AuthorRecord] {
        &self.filtered
    }

    /// The active (trimmed) query, empty when unfiltered.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Average biography length over the full record set, rounded to the
    /// nearest integer (halves round up). Records without a bio count as 0;
    /// an empty store yields 0.
    ///
    /// ```
    /// use authorgrid::domain::AuthorRecord;
    /// use authorgrid::store::AuthorStore;
    ///
    /// let mut store = AuthorStore::new();
    /// store.replace_all(vec![
    ///     AuthorRecord::new("a", "", "", Some("1234".to_string())),
    ///     AuthorRecord::new("b", "", "", None),
    /// ]);
    /// assert_eq!(store.average_bio_length(), 2);
    /// ```
    #[must_use]
    pub fn average_bio_length(&self) -> usize {
        let count = self.all.len();
        if count == 0 {
            return 0;
        }
        let total: usize = self.all.iter().map(AuthorRecord::bio_len).sum();
        (2 * total + count) / (2 * count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::matches;

    fn record(author: &str, bio: Option<&str>) -> AuthorRecord {
        AuthorRecord::new(
            author,
            format!("https://img.example/{author}.png"),
            format!("https://news.example/author/{author}"),
            bio.map(str::to_string),
        )
    }

    fn sample() -> Vec<AuthorRecord> {
        vec![
            record("Quincy Larson", Some("Educator and founder")),
            record("Abbey Rennemeyer", Some("Editor who loves rust")),
            record("Beau Carnes", None),
            record("Jessica Wilkins", Some("Musician turned developer")),
            record("Rusty Larsen", Some("")),
        ]
    }

    fn is_subsequence(sub: &[AuthorRecord], full: &[AuthorRecord]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|wanted| it.any(|candidate| candidate == wanted))
    }

    #[test]
    fn replace_all_resets_query_and_view() {
        let mut store = AuthorStore::new();
        store.replace_all(sample());
        store.apply_filter("rust");
        assert_eq!(store.query(), "rust");

        store.replace_all(sample());

        assert_eq!(store.query(), "");
        assert_eq!(store.filtered(), store.all());
    }

    #[test]
    fn filter_yields_ordered_subsequence_of_matches() {
        let mut store = AuthorStore::new();
        store.replace_all(sample());

        for query in ["rust", "LARS", "er", "zzz", " quincy "] {
            store.apply_filter(query);
            assert!(is_subsequence(store.filtered(), store.all()), "query {query:?}");
            assert!(store.filtered().iter().all(|r| matches(query, r)));
            let expected = store.all().iter().filter(|r| matches(query, r)).count();
            assert_eq!(store.filtered_count(), expected, "query {query:?}");
        }
    }

    #[test]
    fn rust_query_matches_name_and_bio() {
        let mut store = AuthorStore::new();
        store.replace_all(sample());
        store.apply_filter("rust");

        let names: Vec<&str> = store.filtered().iter().map(|r| r.author.as_str()).collect();
        assert_eq!(names, vec!["Abbey Rennemeyer", "Rusty Larsen"]);
    }

    #[test]
    fn empty_query_restores_everything() {
        let mut store = AuthorStore::new();
        store.replace_all(sample());
        store.apply_filter("quincy");
        store.apply_filter("");

        assert_eq!(store.filtered(), store.all());
    }

    #[test]
    fn average_bio_length_counts_null_as_zero() {
        let mut store = AuthorStore::new();
        store.replace_all(vec![
            record("a", Some("")),
            record("b", Some(&"x".repeat(10))),
            record("c", Some(&"y".repeat(20))),
            record("d", None),
        ]);

        assert_eq!(store.average_bio_length(), 8);
    }

    #[test]
    fn average_bio_length_of_empty_store_is_zero() {
        assert_eq!(AuthorStore::new().average_bio_length(), 0);
    }
}
