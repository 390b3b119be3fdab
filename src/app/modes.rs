//! State machine enums for loading, connection display and input handling.
//!
//! [`LoadState`] is the lifecycle of the directory fetch and gates which
//! events the handler accepts. [`ConnectionStatus`] is purely cosmetic and
//! reflects the most recent transition. [`InputMode`] decides how keystrokes
//! are interpreted by the plugin shim.
//!
//! ```text
//!          InitialLoad / Refresh / Retry / stale check
//!   Idle ─────────────────────────────────────────────► Loading
//!                                                         │
//!                       success ┌─────────────────────────┤ failure
//!                               ▼                         ▼
//!                            Loaded ◄──── Retry ────── Errored
//!                               └──── Refresh ──► Loading
//! ```

use std::fmt;

/// Lifecycle of the directory fetch. There is exactly one per plugin and
/// never more than one fetch in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet (waiting for permissions).
    #[default]
    Idle,
    /// A fetch is in flight; fetch-starting events and searches are ignored.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; the error panel is shown.
    Errored,
}

impl LoadState {
    /// Label shown in the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Loading => "FETCHING_DATA...",
            Self::Loaded => "LOADED",
            Self::Errored => "ERROR",
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Connection indicator shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Last fetch succeeded (or a refresh was just requested).
    #[default]
    Established,
    /// Last fetch failed.
    Disconnected,
    /// The pane became visible.
    Active,
    /// The pane was hidden.
    Background,
}

impl ConnectionStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Established => "ESTABLISHED",
            Self::Disconnected => "DISCONNECTED",
            Self::Active => "ACTIVE",
            Self::Background => "BACKGROUND",
        }
    }

    /// `true` for statuses drawn with the error color.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How keystrokes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands: load more, refresh, move, quit.
    #[default]
    Browse,
    /// Keys edit the search query.
    Search,
}
