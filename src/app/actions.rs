//! Side effects requested by the event handler.
//!
//! The handler never talks to the host. It returns a `Vec<Action>` and the
//! plugin shim performs each one in order: web requests, timers, hiding the
//! pane.
//!
//! # Example
//!
//! ```rust
//! use authorgrid::app::Action;
//! use std::time::Duration;
//!
//! let action = Action::ScheduleTimer { after: Duration::from_millis(300) };
//! assert_ne!(action, Action::Close);
//! ```

use crate::client::FetchRequest;
use std::time::Duration;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Performs one GET through the host's web request capability.
    ///
    /// The completion comes back as `Event::FetchCompleted` carrying the
    /// request's context map.
    Fetch(FetchRequest),

    /// Asks the host for one `Event::TimerFired` after `after` has elapsed.
    ScheduleTimer { after: Duration },

    /// Hides the plugin pane.
    Close,
}
