//! Application state and view model computation.
//!
//! [`AppState`] owns everything the directory viewer knows: the fetched
//! records and their filtered view, the pagination window, the fetch
//! lifecycle, the search bar, the card grid and the display status. The
//! event handler is the only writer; the renderer only reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Store**: all fetched records plus the filtered view for the active query
//! - **Paginator**: window over the filtered view, advanced by load-more
//! - **Grid**: rendered cards, replaced or appended to by the card renderer
//! - **Lifecycle**: [`LoadState`], the in-flight request id, the last success
//! - **Search**: the edited text and the debouncer that applies it
//! - **Staleness**: when the next periodic check is due and the thresholds
//!
//! # Example
//!
//! ```rust
//! use authorgrid::app::AppState;
//! use authorgrid::{Config, Theme};
//! use chrono::Utc;
//!
//! let state = AppState::new(&Config::default(), Theme::default(), Utc::now());
//! let status = state.status();
//! assert_eq!(status.total_count, 0);
//! ```

use super::debounce::Debouncer;
use super::modes::{ConnectionStatus, InputMode, LoadState};
use crate::client::{AuthorClient, FetchRequest};
use crate::domain::{AuthorRecord, FetchError};
use crate::store::{AuthorStore, Paginator};
use crate::ui::cards::{self, ErrorPanel, Grid, Placeholder, RenderTarget};
use crate::ui::helpers::{truncate_to_width, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardView, EmptyState, ErrorView, FooterInfo, HeaderInfo, LoadMoreInfo, SearchBarInfo,
    StatusBarInfo, UIViewModel,
};
use crate::Config;
use chrono::{DateTime, Duration, Utc};

/// Rows taken by one card, separator included.
const CARD_HEIGHT: usize = 5;

/// Rows taken by header, stats, borders, load-more line, status bar and footer.
const CHROME_ROWS: usize = 8;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Bio lines shown per card.
const BIO_LINES: usize = 2;

/// Left indent of card content.
const CARD_INDENT: usize = 4;

/// Values reported to the status bar after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub load_state: LoadState,
    /// Records in the last successful fetch.
    pub total_count: usize,
    /// Records matching the active query.
    pub displayed_count: usize,
    /// Cards currently on the grid.
    pub rendered_count: usize,
    /// Rounded mean biography length over all records.
    pub average_bio_length: usize,
    pub connection: ConnectionStatus,
    pub last_update: DateTime<Utc>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fetched records and the filtered view.
    pub store: AuthorStore,

    /// Window over the filtered view.
    pub paginator: Paginator,

    /// Request builder for the directory endpoint.
    pub client: AuthorClient,

    pub load_state: LoadState,

    pub connection: ConnectionStatus,

    /// Whether keystrokes edit the search text.
    pub input_mode: InputMode,

    /// Text in the search bar. Applied to the store through the debouncer,
    /// so it can run ahead of `store.query()`.
    pub search_text: String,

    pub debouncer: Debouncer,

    /// Rendered card grid.
    pub grid: Grid,

    /// Error panel of the last failed fetch, cleared when a new fetch starts.
    pub error: Option<ErrorPanel>,

    /// Id of the request whose completion is awaited.
    pub in_flight: Option<u64>,

    /// Time of the last successful fetch, or of startup.
    pub last_update: DateTime<Utc>,

    /// Whether the plugin pane is currently shown.
    pub visible: bool,

    /// Whether the load-more control accepts input.
    pub load_more_enabled: bool,

    /// Index of the highlighted card on the grid.
    pub selected_index: usize,

    /// Due time of the next periodic staleness check, once armed.
    pub next_stale_check: Option<DateTime<Utc>>,

    pub stale_check_interval: Duration,

    pub stale_after: Duration,

    pub theme: Theme,
}

impl AppState {
    /// Creates the startup state: `Idle`, empty grid, visible pane.
    ///
    /// `now` becomes the initial `last_update`, so the first staleness check
    /// measures age from startup until a fetch succeeds.
    #[must_use]
    pub fn new(config: &Config, theme: Theme, now: DateTime<Utc>) -> Self {
        Self {
            store: AuthorStore::new(),
            paginator: Paginator::new(config.page_size),
            client: AuthorClient::new(config.endpoint.clone()),
            load_state: LoadState::Idle,
            connection: ConnectionStatus::default(),
            input_mode: InputMode::Browse,
            search_text: String::new(),
            debouncer: Debouncer::new(config.search_debounce_ms),
            grid: Grid::default(),
            error: None,
            in_flight: None,
            last_update: now,
            visible: true,
            load_more_enabled: false,
            selected_index: 0,
            next_stale_check: None,
            stale_check_interval: seconds(config.stale_check_interval_secs.max(1)),
            stale_after: seconds(config.stale_after_secs),
            theme,
        }
    }

    /// Current status tuple.
    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            load_state: self.load_state,
            total_count: self.store.total_count(),
            displayed_count: self.store.filtered_count(),
            rendered_count: self.grid.card_count(),
            average_bio_length: self.store.average_bio_length(),
            connection: self.connection,
            last_update: self.last_update,
        }
    }

    /// Starts a fetch unless one is already in flight.
    ///
    /// A refresh also discards the search text, any pending debounced query
    /// and the pagination window. Returns the request the host must perform.
    pub fn begin_fetch(&mut self, refresh: bool) -> Option<FetchRequest> {
        if self.load_state == LoadState::Loading {
            tracing::debug!(refresh = refresh, "fetch already in flight, ignoring");
            return None;
        }

        if refresh {
            self.search_text.clear();
            self.debouncer.cancel();
            self.paginator.reset();
            self.connection = ConnectionStatus::Established;
        }

        let request = self.client.next_request();
        self.in_flight = Some(request.id);
        self.load_state = LoadState::Loading;
        self.error = None;
        self.load_more_enabled = false;
        self.selected_index = 0;
        cards::loading().apply_to(&mut self.grid);

        tracing::debug!(request_id = request.id, refresh = refresh, "fetch started");
        Some(request)
    }

    /// Whether a completion tagged with `request_id` belongs to the fetch in
    /// flight.
    #[must_use]
    pub fn awaits(&self, request_id: Option<u64>) -> bool {
        self.load_state == LoadState::Loading
            && request_id.is_some()
            && request_id == self.in_flight
    }

    /// Installs freshly fetched records and renders their first page.
    pub fn complete_fetch(&mut self, records: Vec<AuthorRecord>, at: DateTime<Utc>) {
        self.in_flight = None;
        self.store.replace_all(records);
        self.search_text.clear();
        self.debouncer.cancel();
        self.paginator.reset();
        self.load_state = LoadState::Loaded;
        self.connection = ConnectionStatus::Established;
        self.last_update = at;
        self.render_first_page();

        tracing::debug!(
            total = self.store.total_count(),
            rendered = self.grid.card_count(),
            "fetch completed"
        );
    }

    /// Records a failed fetch: error panel up, grid cleared.
    pub fn fail_fetch(&mut self, error: &FetchError) {
        tracing::warn!(error = %error, "fetch failed");

        self.in_flight = None;
        self.load_state = LoadState::Errored;
        self.connection = ConnectionStatus::Disconnected;
        self.error = Some(cards::error_panel(error));
        self.load_more_enabled = false;
        self.selected_index = 0;
        self.grid.clear();
    }

    /// Appends the next page to the grid.
    ///
    /// Returns `false` without touching anything unless records are loaded and
    /// more pages remain.
    pub fn load_more(&mut self) -> bool {
        if self.load_state != LoadState::Loaded
            || !self.paginator.has_more(self.store.filtered_count())
        {
            return false;
        }

        let page = self.paginator.advance(self.store.filtered());
        if !page.is_empty() {
            cards::render(page, true, None).apply_to(&mut self.grid);
        }
        self.load_more_enabled = self.paginator.has_more(self.store.filtered_count());

        tracing::debug!(
            start = self.paginator.start(),
            rendered = self.grid.card_count(),
            has_more = self.load_more_enabled,
            "page appended"
        );
        true
    }

    /// Filters the store by `query` and renders the first matching page.
    ///
    /// Returns `false` while a fetch is in flight, leaving the filtered view
    /// and the window untouched.
    pub fn apply_search(&mut self, query: &str) -> bool {
        if self.load_state == LoadState::Loading {
            tracing::debug!(query = %query, "search ignored while loading");
            return false;
        }

        self.store.apply_filter(query);
        self.paginator.reset();
        self.render_first_page();
        true
    }

    /// Whether a periodic check at `now` should refresh the directory.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.visible
            && self.load_state != LoadState::Loading
            && now - self.last_update > self.stale_after
    }

    /// Replaces the grid with the current page of the filtered view.
    fn render_first_page(&mut self) {
        let page = self.paginator.current_page(self.store.filtered());
        let query = Some(self.store.query()).filter(|q| !q.is_empty());
        cards::render(page, false, query).apply_to(&mut self.grid);
        self.load_more_enabled = self.paginator.has_more(self.store.filtered_count());
        self.selected_index = 0;
    }

    /// Moves the card cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.grid.card_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the card cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.grid.card_count();
        if count == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// The card list is windowed around the selected card so the cursor
    /// stays on screen as more pages are appended.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let search_bar = self.compute_search_bar();
        let chrome = CHROME_ROWS + if search_bar.is_some() { SEARCH_BAR_ROWS } else { 0 };
        let available_rows = rows.saturating_sub(chrome);

        UIViewModel {
            header: self.compute_header(),
            search_bar,
            body: self.compute_body(available_rows, cols),
            load_more: self.compute_load_more(),
            status_bar: self.compute_status_bar(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let status = self.status();
        HeaderInfo {
            title: " AUTHOR_DIRECTORY ".to_string(),
            stats: format!(
                "TOTAL: {}  MATCHING: {}  SHOWN: {}  AVG_BIO: {} chars",
                status.total_count,
                status.displayed_count,
                status.rendered_count,
                status.average_bio_length
            ),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let editing = self.input_mode == InputMode::Search;
        if editing || !self.search_text.is_empty() {
            Some(SearchBarInfo {
                query: self.search_text.clone(),
                editing,
                pending: self.debouncer.is_pending(),
            })
        } else {
            None
        }
    }

    fn compute_body(&self, available_rows: usize, cols: usize) -> Body {
        if let Some(panel) = &self.error {
            return Body::Error(ErrorView {
                title: panel.title.clone(),
                message: panel.message.clone(),
                detail: panel.detail.clone(),
                action: format!("{}  (press r)", panel.action),
            });
        }

        if let Some(placeholder) = self.grid.placeholder() {
            let subtitle = match placeholder {
                Placeholder::Loading => format!("GET {}", self.client.endpoint()),
                Placeholder::Empty { query: Some(_) } => "Esc clears the search".to_string(),
                Placeholder::Empty { query: None } => "Press r to refresh".to_string(),
            };
            return Body::Empty(EmptyState {
                message: placeholder.message(),
                subtitle,
            });
        }

        if self.grid.is_empty() {
            return Body::Empty(EmptyState {
                message: "AWAITING_PERMISSION".to_string(),
                subtitle: "Grant web access to load the directory".to_string(),
            });
        }

        let per_screen = (available_rows / CARD_HEIGHT).max(1);
        let total = self.grid.card_count();

        let mut window_start = self.selected_index.saturating_sub(per_screen / 2);
        let window_end = (window_start + per_screen).min(total);
        if window_end - window_start < per_screen && total >= per_screen {
            window_start = window_end.saturating_sub(per_screen);
        }

        let text_width = cols.saturating_sub(CARD_INDENT + 2);
        let cards = self
            .grid
            .cards()
            .enumerate()
            .skip(window_start)
            .take(window_end - window_start)
            .map(|(idx, card)| CardView {
                name: truncate_to_width(&card.name, text_width),
                avatar: match &card.avatar {
                    cards::Avatar::Remote(_) => "◉".to_string(),
                    cards::Avatar::Fallback => "◌".to_string(),
                },
                bio_lines: wrap_text(&card.bio_excerpt, text_width, BIO_LINES),
                link: truncate_to_width(
                    &format!("{}  {}", cards::PROFILE_LINK_LABEL, card.profile_url),
                    text_width,
                ),
                is_selected: idx == self.selected_index,
            })
            .collect();

        Body::Cards {
            cards,
            position: format!("{}/{}", self.selected_index + 1, total),
        }
    }

    fn compute_load_more(&self) -> LoadMoreInfo {
        let label = match self.load_state {
            LoadState::Loaded if self.load_more_enabled => "[ LOAD_MORE ]",
            LoadState::Loaded => "[ NO_MORE_AUTHORS ]",
            LoadState::Loading => "[ LOADING... ]",
            LoadState::Idle | LoadState::Errored => "",
        };
        LoadMoreInfo {
            label: label.to_string(),
            enabled: self.load_more_enabled,
        }
    }

    fn compute_status_bar(&self) -> StatusBarInfo {
        StatusBarInfo {
            load_state: format!("STATUS: {}", self.load_state),
            connection: format!("CONNECTION: {}", self.connection),
            connection_alert: self.connection.is_alert(),
            last_update: format!("LAST_UPDATE: {}", self.last_update.format("%H:%M:%S UTC")),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to filter  Enter: apply  Esc: clear  Backspace: delete",
            InputMode::Browse if self.load_state == LoadState::Errored => {
                "r: retry  /: search  q: hide"
            }
            InputMode::Browse => {
                "j/k: move  Space: load more  /: search  r: refresh  q: hide"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Seconds clamped to [`crate::MAX_STALE_SECS`].
fn seconds(secs: u64) -> Duration {
    i64::try_from(secs.min(crate::MAX_STALE_SECS))
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(Duration::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn records(n: usize) -> Vec<AuthorRecord> {
        (0..n)
            .map(|i| {
                AuthorRecord::new(
                    format!("Author {i}"),
                    format!("https://img.example/{i}.png"),
                    format!("https://news.example/author-{i}"),
                    Some(format!("Bio number {i}")),
                )
            })
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::new(&Config::default(), Theme::default(), t(0));
        state.begin_fetch(false).unwrap();
        state.complete_fetch(records(n), t(1));
        state
    }

    #[test]
    fn begin_fetch_is_rejected_while_loading() {
        let mut state = AppState::new(&Config::default(), Theme::default(), t(0));
        let first = state.begin_fetch(false).unwrap();

        assert!(state.begin_fetch(true).is_none());
        assert_eq!(state.in_flight, Some(first.id));
        assert_eq!(state.grid.placeholder(), Some(&Placeholder::Loading));
    }

    #[test]
    fn only_the_in_flight_request_is_awaited() {
        let mut state = AppState::new(&Config::default(), Theme::default(), t(0));
        let request = state.begin_fetch(false).unwrap();

        assert!(state.awaits(Some(request.id)));
        assert!(!state.awaits(Some(request.id + 1)));
        assert!(!state.awaits(None));
    }

    #[test]
    fn refresh_resets_search_and_window() {
        let mut state = loaded(20);
        state.search_text = "auth".to_string();
        state.debouncer.schedule("auth", t(2));
        state.load_more();

        state.begin_fetch(true).unwrap();

        assert!(state.search_text.is_empty());
        assert!(!state.debouncer.is_pending());
        assert_eq!(state.paginator.start(), 0);
    }

    #[test]
    fn status_reflects_store_and_grid() {
        let state = loaded(10);
        let status = state.status();

        assert_eq!(status.load_state, LoadState::Loaded);
        assert_eq!(status.total_count, 10);
        assert_eq!(status.displayed_count, 10);
        assert_eq!(status.rendered_count, 8);
        assert_eq!(status.connection, ConnectionStatus::Established);
        assert_eq!(status.last_update, t(1));
    }

    #[test]
    fn staleness_requires_visibility_and_age() {
        let mut state = loaded(3);

        assert!(!state.is_stale(t(200)));
        assert!(state.is_stale(t(302)));

        state.visible = false;
        assert!(!state.is_stale(t(302)));
    }

    #[test]
    fn selection_wraps_over_rendered_cards() {
        let mut state = loaded(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn viewmodel_windows_cards_around_selection() {
        let mut state = loaded(20);
        state.load_more();
        state.selected_index = 12;

        let vm = state.compute_viewmodel(8 + 3 * CARD_HEIGHT, 80);
        let Body::Cards { cards, position } = vm.body else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().any(|c| c.is_selected));
        assert_eq!(position, "13/16");
    }

    #[test]
    fn viewmodel_shows_error_panel_after_failure() {
        let mut state = AppState::new(&Config::default(), Theme::default(), t(0));
        state.begin_fetch(false).unwrap();
        state.fail_fetch(&FetchError::Status {
            status: 503,
            detail: String::new(),
        });

        let vm = state.compute_viewmodel(24, 80);
        let Body::Error(panel) = vm.body else {
            panic!("expected error panel");
        };
        assert_eq!(panel.detail, "Error: HTTP 503");
        assert!(vm.status_bar.connection_alert);
    }

    #[test]
    fn search_bar_is_shown_while_editing_or_filtered() {
        let mut state = loaded(3);
        assert!(state.compute_viewmodel(24, 80).search_bar.is_none());

        state.input_mode = InputMode::Search;
        assert!(state.compute_viewmodel(24, 80).search_bar.is_some());
    }
}
