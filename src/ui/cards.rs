//! Card rendering: records to grid entries.
//!
//! [`render`] is a pure mapping from a slice of records to a [`RenderedList`]
//! describing what the card grid should contain. The list is then applied to
//! any [`RenderTarget`]; [`Grid`] is the in-memory target owned by the
//! application state and drawn by the terminal components.
//!
//! # Rules
//!
//! - a non-append render discards the previous grid content first
//! - an empty record slice renders one [`Placeholder::Empty`] entry that
//!   replaces the grid, echoing the active query when there is one
//! - every record becomes one [`AuthorCard`]

use crate::domain::{AuthorRecord, FetchError};

/// Maximum number of biography characters shown on a card.
pub const BIO_EXCERPT_CHARS: usize = 120;

/// Marker appended to truncated biographies.
pub const CONTINUATION_MARKER: &str = "...";

/// Text shown for authors without a biography.
pub const MISSING_BIO: &str = "No biography available";

/// Label of the outbound profile link.
pub const PROFILE_LINK_LABEL: &str = "VIEW_PROFILE →";

/// Avatar reference carried by a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// A remote image URL.
    Remote(String),
    /// The built-in placeholder, used when the record's reference is blank
    /// or not an http(s) URL.
    Fallback,
}

impl Avatar {
    fn from_reference(image: &str) -> Self {
        let image = image.trim();
        if image.starts_with("https://") || image.starts_with("http://") {
            Self::Remote(image.to_string())
        } else {
            Self::Fallback
        }
    }
}

/// Display data for one author card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCard {
    pub name: String,
    pub avatar: Avatar,
    pub bio_excerpt: String,
    pub profile_url: String,
}

impl AuthorCard {
    #[must_use]
    pub fn from_record(record: &AuthorRecord) -> Self {
        Self {
            name: record.author.clone(),
            avatar: Avatar::from_reference(&record.image),
            bio_excerpt: bio_excerpt(record.bio.as_deref()),
            profile_url: record.url.clone(),
        }
    }
}

/// Non-card grid states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// A fetch is in flight.
    Loading,
    /// Nothing to show, optionally for a specific query.
    Empty { query: Option<String> },
}

impl Placeholder {
    /// Text shown in place of the cards.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Loading => "CONNECTING_TO_API...".to_string(),
            Self::Empty { query: None } => "NO_AUTHORS_FOUND".to_string(),
            Self::Empty { query: Some(q) } => format!("NO_AUTHORS_FOUND for \"{q}\""),
        }
    }
}

/// One entry of the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEntry {
    Card(AuthorCard),
    Placeholder(Placeholder),
}

/// Whether a rendered list replaces or extends the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Replace,
    Append,
}

/// Output of [`render`]: entries plus how to apply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub mode: RenderMode,
    pub entries: Vec<GridEntry>,
}

impl RenderedList {
    /// Applies the list to a render target.
    pub fn apply_to<T: RenderTarget + ?Sized>(self, target: &mut T) {
        if self.mode == RenderMode::Replace {
            target.clear();
        }
        target.append(self.entries);
    }
}

/// Anything that can hold rendered grid content.
pub trait RenderTarget {
    /// Discards all content.
    fn clear(&mut self);

    /// Adds entries after the existing content.
    fn append(&mut self, entries: Vec<GridEntry>);
}

/// In-memory card grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    entries: Vec<GridEntry>,
}

impl Grid {
    #[must_use]
    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    /// Number of author cards currently on the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, GridEntry::Card(_)))
            .count()
    }

    /// Iterates over the cards, skipping placeholders.
    pub fn cards(&self) -> impl Iterator<Item = &AuthorCard> {
        self.entries.iter().filter_map(|entry| match entry {
            GridEntry::Card(card) => Some(card),
            GridEntry::Placeholder(_) => None,
        })
    }

    /// The placeholder shown instead of cards, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.entries.iter().find_map(|entry| match entry {
            GridEntry::Placeholder(p) => Some(p),
            GridEntry::Card(_) => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RenderTarget for Grid {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entries: Vec<GridEntry>) {
        self.entries.extend(entries);
    }
}

/// Maps records to grid entries.
///
/// `query` is only used for the empty placeholder; a blank query is not
/// echoed.
///
/// # Examples
///
/// ```
/// use authorgrid::domain::AuthorRecord;
/// use authorgrid::ui::cards::{render, Grid, GridEntry, Placeholder};
///
/// let mut grid = Grid::default();
/// let record = AuthorRecord::new("Ada", "https://img/ada.png", "https://x/ada", None);
///
/// render(&[record], false, None).apply_to(&mut grid);
/// assert_eq!(grid.card_count(), 1);
///
/// render(&[], false, Some("zzz")).apply_to(&mut grid);
/// assert_eq!(
///     grid.entries(),
///     &[GridEntry::Placeholder(Placeholder::Empty { query: Some("zzz".to_string()) })]
/// );
/// ```
#[must_use]
pub fn render(records: &[AuthorRecord], append: bool, query: Option<&str>) -> RenderedList {
    if records.is_empty() {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        return RenderedList {
            mode: RenderMode::Replace,
            entries: vec![GridEntry::Placeholder(Placeholder::Empty { query })],
        };
    }

    RenderedList {
        mode: if append { RenderMode::Append } else { RenderMode::Replace },
        entries: records
            .iter()
            .map(|record| GridEntry::Card(AuthorCard::from_record(record)))
            .collect(),
    }
}

/// Grid content while a fetch is in flight.
#[must_use]
pub fn loading() -> RenderedList {
    RenderedList {
        mode: RenderMode::Replace,
        entries: vec![GridEntry::Placeholder(Placeholder::Loading)],
    }
}

/// Shortens a biography for display.
///
/// Biographies longer than [`BIO_EXCERPT_CHARS`] characters are cut at
/// exactly that many characters (not at a word boundary) and get
/// [`CONTINUATION_MARKER`] appended. Missing or empty biographies become
/// [`MISSING_BIO`].
///
/// ```
/// use authorgrid::ui::cards::{bio_excerpt, MISSING_BIO};
///
/// let long = "a".repeat(150);
/// assert_eq!(bio_excerpt(Some(&long)), format!("{}...", "a".repeat(120)));
/// assert_eq!(bio_excerpt(Some("short")), "short");
/// assert_eq!(bio_excerpt(None), MISSING_BIO);
/// ```
#[must_use]
pub fn bio_excerpt(bio: Option<&str>) -> String {
    match bio {
        None | Some("") => MISSING_BIO.to_string(),
        Some(text) if text.chars().count() > BIO_EXCERPT_CHARS => {
            let mut excerpt: String = text.chars().take(BIO_EXCERPT_CHARS).collect();
            excerpt.push_str(CONTINUATION_MARKER);
            excerpt
        }
        Some(text) => text.to_string(),
    }
}

/// Content of the error panel shown after a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
    pub detail: String,
    pub action: String,
}

/// Builds the error panel for a fetch failure.
#[must_use]
pub fn error_panel(error: &FetchError) -> ErrorPanel {
    ErrorPanel {
        title: "NETWORK_ERROR".to_string(),
        message: "Failed to load authors data".to_string(),
        detail: format!("Error: {error}"),
        action: "RETRY_CONNECTION".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str) -> AuthorRecord {
        AuthorRecord::new(
            author,
            format!("https://img.example/{author}.png"),
            format!("https://news.example/{author}"),
            Some(format!("{author} writes tutorials")),
        )
    }

    #[test]
    fn append_keeps_previous_cards() {
        let mut grid = Grid::default();
        render(&[record("a"), record("b")], false, None).apply_to(&mut grid);
        render(&[record("c")], true, None).apply_to(&mut grid);

        let names: Vec<&str> = grid.cards().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn replace_discards_previous_content() {
        let mut grid = Grid::default();
        loading().apply_to(&mut grid);
        render(&[record("a")], false, None).apply_to(&mut grid);

        assert_eq!(grid.card_count(), 1);
        assert!(grid.placeholder().is_none());
    }

    #[test]
    fn empty_render_replaces_even_in_append_mode() {
        let mut grid = Grid::default();
        render(&[record("a")], false, None).apply_to(&mut grid);
        render(&[], true, Some("  ")).apply_to(&mut grid);

        assert_eq!(grid.card_count(), 0);
        assert_eq!(grid.placeholder(), Some(&Placeholder::Empty { query: None }));
    }

    #[test]
    fn bio_of_exactly_limit_is_unchanged() {
        let exact = "b".repeat(BIO_EXCERPT_CHARS);
        assert_eq!(bio_excerpt(Some(&exact)), exact);
        assert_eq!(bio_excerpt(Some(&"c".repeat(100))), "c".repeat(100));
        assert_eq!(bio_excerpt(Some("")), MISSING_BIO);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(130);
        let excerpt = bio_excerpt(Some(&long));
        assert_eq!(excerpt.chars().count(), BIO_EXCERPT_CHARS + CONTINUATION_MARKER.len());
        assert!(excerpt.ends_with(CONTINUATION_MARKER));
    }

    #[test]
    fn avatar_falls_back_for_blank_or_non_http_references() {
        assert_eq!(Avatar::from_reference(""), Avatar::Fallback);
        assert_eq!(Avatar::from_reference("not a url"), Avatar::Fallback);
        assert_eq!(
            Avatar::from_reference("https://img/a.png"),
            Avatar::Remote("https://img/a.png".to_string())
        );
    }

    #[test]
    fn error_panel_carries_failure_detail() {
        let panel = error_panel(&FetchError::Status {
            status: 500,
            detail: String::new(),
        });
        assert_eq!(panel.detail, "Error: HTTP 500");
        assert_eq!(panel.action, "RETRY_CONNECTION");
    }

    #[test]
    fn placeholder_messages_echo_query() {
        assert_eq!(
            Placeholder::Empty { query: Some("rust".to_string()) }.message(),
            "NO_AUTHORS_FOUND for \"rust\""
        );
        assert_eq!(Placeholder::Loading.message(), "CONNECTING_TO_API...");
    }
}
