//! Event handling and state transition logic.
//!
//! [`handle_event`] is the view controller of the directory viewer. It
//! receives one [`Event`] at a time from the plugin shim, mutates
//! [`AppState`], and returns whether the pane needs a redraw plus the side
//! effects the shim must perform.
//!
//! # Event Types
//!
//! - **Fetch lifecycle**: `InitialLoad`, `Refresh`, `Retry`, `FetchCompleted`,
//!   `PermissionDenied`
//! - **Paging**: `LoadMore`
//! - **Search**: `SearchInput`, `SearchChar`, `SearchBackspace`,
//!   `SearchChanged`, `EnterSearch`, `SubmitSearch`, `ExitSearch`
//! - **Timers and visibility**: `TimerFired`, `VisibilityChanged`
//! - **Navigation**: `SelectNext`, `SelectPrevious`, `Close`
//!
//! # Guards
//!
//! At most one fetch is in flight. Every fetch-starting event is a silent
//! no-op while `Loading`, searches are ignored while `Loading`, and a
//! completion is only accepted when its request id matches the fetch in
//! flight.
//!
//! # Example
//!
//! ```rust
//! use authorgrid::app::{handle_event, Action, AppState, Event};
//! use authorgrid::{Config, Theme};
//! use chrono::Utc;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default(), Utc::now());
//! let (_, actions) = handle_event(&mut state, &Event::InitialLoad { at: Utc::now() })?;
//! assert!(actions.iter().any(|a| matches!(a, Action::Fetch(_))));
//! # Ok::<(), authorgrid::AuthorGridError>(())
//! ```

use crate::app::debounce::TIMER_GRACE_MS;
use crate::app::modes::{ConnectionStatus, InputMode};
use crate::app::{Action, AppState};
use crate::client::{request_id_from_context, AuthorClient};
use crate::domain::error::Result;
use crate::domain::FetchError;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Events delivered to the view controller.
///
/// Timestamps are stamped by the shim when the host event arrives, so every
/// time-dependent transition is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First fetch, sent once web access is granted.
    InitialLoad { at: DateTime<Utc> },

    /// Refetch requested by the user; clears search and pagination.
    Refresh { at: DateTime<Utc> },

    /// Refetch after a failure.
    Retry { at: DateTime<Utc> },

    /// Web access was refused, so no fetch can ever succeed.
    PermissionDenied,

    /// Appends the next page of the filtered view.
    LoadMore,

    /// The search text changed to `query`; applied after the debounce delay.
    SearchInput { query: String, at: DateTime<Utc> },

    /// A character typed into the search bar.
    SearchChar { ch: char, at: DateTime<Utc> },

    /// The last character of the search text was deleted.
    SearchBackspace { at: DateTime<Utc> },

    /// Applies `query` to the directory immediately.
    SearchChanged(String),

    /// Focuses the search bar.
    EnterSearch,

    /// Applies the search text now and leaves the search bar.
    SubmitSearch,

    /// Clears the search text, applies the empty query and leaves the bar.
    ExitSearch,

    /// The host finished a web request.
    FetchCompleted {
        status: u16,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
        at: DateTime<Utc>,
    },

    /// A host timer elapsed.
    TimerFired { at: DateTime<Utc> },

    /// The plugin pane was shown or hidden.
    VisibilityChanged(bool),

    SelectNext,

    SelectPrevious,

    /// Hides the plugin pane.
    Close,
}

impl Event {
    /// Short variant name for span fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InitialLoad { .. } => "InitialLoad",
            Self::Refresh { .. } => "Refresh",
            Self::Retry { .. } => "Retry",
            Self::PermissionDenied => "PermissionDenied",
            Self::LoadMore => "LoadMore",
            Self::SearchInput { .. } => "SearchInput",
            Self::SearchChar { .. } => "SearchChar",
            Self::SearchBackspace { .. } => "SearchBackspace",
            Self::SearchChanged(_) => "SearchChanged",
            Self::EnterSearch => "EnterSearch",
            Self::SubmitSearch => "SubmitSearch",
            Self::ExitSearch => "ExitSearch",
            Self::FetchCompleted { .. } => "FetchCompleted",
            Self::TimerFired { .. } => "TimerFired",
            Self::VisibilityChanged(_) => "VisibilityChanged",
            Self::SelectNext => "SelectNext",
            Self::SelectPrevious => "SelectPrevious",
            Self::Close => "Close",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the shim.
///
/// # Errors
///
/// None of the current transitions fail: fetch failures become the
/// `Errored` state instead of propagating. The `Result` leaves room for
/// transitions that touch the filesystem.
///
/// # Tracing
///
/// Each call runs in a debug span named after the event and logs the
/// resulting status snapshot.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    let outcome = match event {
        Event::InitialLoad { at } => {
            let mut actions = Vec::new();
            if state.next_stale_check.is_none() {
                actions.extend(arm_stale_check(state, *at));
            }
            let started = start_fetch(state, false, &mut actions);
            (started, actions)
        }
        Event::Refresh { .. } => {
            let mut actions = Vec::new();
            let started = start_fetch(state, true, &mut actions);
            (started, actions)
        }
        Event::Retry { .. } => {
            let mut actions = Vec::new();
            let started = start_fetch(state, false, &mut actions);
            (started, actions)
        }
        Event::PermissionDenied => {
            state.fail_fetch(&FetchError::Transport(
                "web access permission denied".to_string(),
            ));
            (true, vec![])
        }
        Event::LoadMore => (state.load_more(), vec![]),
        Event::SearchInput { query, at } => {
            state.search_text.clone_from(query);
            (true, vec![schedule_search(state, *at)])
        }
        Event::SearchChar { ch, at } => {
            state.search_text.push(*ch);
            tracing::trace!(query = %state.search_text, "search text updated");
            (true, vec![schedule_search(state, *at)])
        }
        Event::SearchBackspace { at } => {
            if state.search_text.pop().is_none() {
                return Ok((false, vec![]));
            }
            (true, vec![schedule_search(state, *at)])
        }
        Event::SearchChanged(query) => {
            state.debouncer.cancel();
            (state.apply_search(query), vec![])
        }
        Event::EnterSearch => {
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Browse;
            state.debouncer.cancel();
            let query = state.search_text.clone();
            state.apply_search(&query);
            (true, vec![])
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Browse;
            state.search_text.clear();
            state.debouncer.cancel();
            state.apply_search("");
            (true, vec![])
        }
        Event::FetchCompleted {
            status,
            body,
            context,
            at,
        } => {
            let request_id = request_id_from_context(context);
            if !state.awaits(request_id) {
                tracing::debug!(
                    request_id = ?request_id,
                    in_flight = ?state.in_flight,
                    "ignoring completion of a request that is not in flight"
                );
                return Ok((false, vec![]));
            }

            match AuthorClient::parse_response(*status, body) {
                Ok(records) => state.complete_fetch(records, *at),
                Err(error) => state.fail_fetch(&error),
            }
            (true, vec![])
        }
        Event::TimerFired { at } => handle_timer(state, *at),
        Event::VisibilityChanged(visible) => {
            state.visible = *visible;
            state.connection = if *visible {
                ConnectionStatus::Active
            } else {
                ConnectionStatus::Background
            };
            (true, vec![])
        }
        Event::SelectNext => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::Close => (false, vec![Action::Close]),
    };

    tracing::debug!(
        status = ?state.status(),
        should_render = outcome.0,
        action_count = outcome.1.len(),
        "event handled"
    );
    Ok(outcome)
}

/// Begins a fetch and queues it; `false` when one is already in flight.
fn start_fetch(state: &mut AppState, refresh: bool, actions: &mut Vec<Action>) -> bool {
    state.begin_fetch(refresh).map_or(false, |request| {
        actions.push(Action::Fetch(request));
        true
    })
}

/// Records the current search text as pending and asks for its timer.
fn schedule_search(state: &mut AppState, at: DateTime<Utc>) -> Action {
    state.debouncer.schedule(state.search_text.clone(), at);
    Action::ScheduleTimer {
        after: state.debouncer.delay(),
    }
}

/// Sets the next staleness deadline one interval after `at` and asks for its
/// timer. Leaves the check disarmed when the deadline is out of range.
fn arm_stale_check(state: &mut AppState, at: DateTime<Utc>) -> Option<Action> {
    let Some(due) = at.checked_add_signed(state.stale_check_interval) else {
        tracing::warn!(interval = %state.stale_check_interval, "staleness deadline out of range, check disarmed");
        state.next_stale_check = None;
        return None;
    };

    state.next_stale_check = Some(due);
    Some(Action::ScheduleTimer {
        after: state.stale_check_interval.to_std().unwrap_or_default(),
    })
}

/// Flushes a due search, then runs the periodic staleness check if due.
///
/// Host timers cannot be cancelled, so every tick is checked against both
/// deadlines and ticks that match neither fall through.
fn handle_timer(state: &mut AppState, at: DateTime<Utc>) -> (bool, Vec<Action>) {
    let mut should_render = false;
    let mut actions = Vec::new();

    if let Some(query) = state.debouncer.flush_due(at) {
        tracing::debug!(query = %query, "debounced search flushed");
        should_render |= state.apply_search(&query);
    }

    let grace = Duration::milliseconds(TIMER_GRACE_MS);
    if state.next_stale_check.is_some_and(|due| at + grace >= due) {
        actions.extend(arm_stale_check(state, at));

        if state.is_stale(at) {
            tracing::debug!(last_update = %state.last_update, "directory is stale, refreshing");
            should_render |= start_fetch(state, true, &mut actions);
        }
    }

    (should_render, actions)
}
