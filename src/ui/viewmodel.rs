//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready text only; every decision about what
//! to show has already been made.
//!
//! # Example
//!
//! ```rust
//! use authorgrid::ui::viewmodel::{Body, EmptyState};
//!
//! let body = Body::Empty(EmptyState {
//!     message: "NO_AUTHORS_FOUND".to_string(),
//!     subtitle: "Press r to refresh".to_string(),
//! });
//! assert!(matches!(body, Body::Empty(_)));
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Present while the search bar is focused or a query is typed.
    pub search_bar: Option<SearchBarInfo>,

    /// Main area: cards, a placeholder, or the error panel.
    pub body: Body,

    pub load_more: LoadMoreInfo,

    pub status_bar: StatusBarInfo,

    pub footer: FooterInfo,
}

/// Content of the main area.
#[derive(Debug, Clone)]
pub enum Body {
    /// Visible window of the card grid.
    Cards {
        cards: Vec<CardView>,
        /// Cursor position over all rendered cards, e.g. `"3/16"`.
        position: String,
    },
    /// Loading, empty-result or not-yet-loaded placeholder.
    Empty(EmptyState),
    /// Failed fetch.
    Error(ErrorView),
}

/// One author card as drawn.
#[derive(Debug, Clone)]
pub struct CardView {
    /// Author name, truncated to the pane width.
    pub name: String,

    /// Avatar glyph: filled for a remote image, hollow for the fallback.
    pub avatar: String,

    /// Wrapped biography excerpt.
    pub bio_lines: Vec<String>,

    /// Profile link line.
    pub link: String,

    pub is_selected: bool,
}

/// Title bar and directory statistics.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub stats: String,
}

/// Footer help text.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered two-line message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Error panel content.
#[derive(Debug, Clone)]
pub struct ErrorView {
    pub title: String,
    pub message: String,
    pub detail: String,
    pub action: String,
}

/// Search input box.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes currently go to the search box.
    pub editing: bool,

    /// Whether a typed query is waiting for the debounce delay.
    pub pending: bool,
}

/// Load-more control line.
#[derive(Debug, Clone)]
pub struct LoadMoreInfo {
    /// Empty when the control is hidden.
    pub label: String,
    pub enabled: bool,
}

/// Bottom status bar.
#[derive(Debug, Clone)]
pub struct StatusBarInfo {
    pub load_state: String,
    pub connection: String,
    /// Whether the connection text uses the error color.
    pub connection_alert: bool,
    pub last_update: String,
}
