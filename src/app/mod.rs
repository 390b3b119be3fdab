//! Application layer: the directory viewer's state machine.
//!
//! ```text
//! Host event → Event → handle_event → AppState mutations → Actions → shim
//!                                          │
//!                                          └─► Grid (card renderer)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects the shim performs (fetch, timer, hide)
//! - [`debounce`]: keystroke coalescing for the search bar
//! - [`handler`]: event processing and transition rules
//! - [`modes`]: load, connection and input mode enums
//! - [`state`]: the state container, status snapshot and view model

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE_MS};
pub use handler::{handle_event, Event};
pub use modes::{ConnectionStatus, InputMode, LoadState};
pub use state::{AppState, StatusSnapshot};
