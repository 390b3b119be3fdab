//! Author record domain model.
//!
//! An [`AuthorRecord`] is one entry of the remote directory: a display name,
//! an avatar reference, a profile link and an optional biography. Records are
//! deserialized once from the endpoint's JSON body and never mutated
//! afterwards; the rest of the plugin only filters and slices them.

use serde::{Deserialize, Serialize};

/// One author's display data as served by the directory endpoint.
///
/// # Fields
///
/// - `author`: display name
/// - `image`: avatar URL (may be blank or broken, see `Avatar` in the renderer)
/// - `url`: outbound profile link
/// - `bio`: biography, absent or `null` for some authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub author: String,
    pub image: String,
    pub url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl AuthorRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        author: impl Into<String>,
        image: impl Into<String>,
        url: impl Into<String>,
        bio: Option<String>,
    ) -> Self {
        Self {
            author: author.into(),
            image: image.into(),
            url: url.into(),
            bio,
        }
    }

    /// Length of the biography in characters, `0` when there is none.
    ///
    /// ```
    /// use authorgrid::domain::AuthorRecord;
    ///
    /// let record = AuthorRecord::new("Quincy", "", "", Some("héllo".to_string()));
    /// assert_eq!(record.bio_len(), 5);
    /// assert_eq!(AuthorRecord::new("Quincy", "", "", None).bio_len(), 0);
    /// ```
    #[must_use]
    pub fn bio_len(&self) -> usize {
        self.bio.as_deref().map_or(0, |bio| bio.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_missing_and_null_bio() {
        let json = r#"[
            {"author": "A", "image": "https://x/a.png", "url": "https://x/a"},
            {"author": "B", "image": "https://x/b.png", "url": "https://x/b", "bio": null},
            {"author": "C", "image": "https://x/c.png", "url": "https://x/c", "bio": "Writer"}
        ]"#;

        let records: Vec<AuthorRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].bio, None);
        assert_eq!(records[1].bio, None);
        assert_eq!(records[2].bio.as_deref(), Some("Writer"));
    }

    #[test]
    fn rejects_record_without_author() {
        let json = r#"[{"image": "i", "url": "u"}]"#;
        assert!(serde_json::from_str::<Vec<AuthorRecord>>(json).is_err());
    }
}
