//! Authorgrid: a Zellij plugin that browses a remote author directory.
//!
//! The plugin fetches a JSON array of author records from an HTTP endpoint
//! and shows them as paginated, searchable cards:
//! - Eight cards per page, more appended on demand
//! - Case-insensitive search over names and biographies, debounced while typing
//! - Status bar with load state, connection and last update time
//! - Background refresh when the data goes stale while the pane is visible
//! - Error panel with retry when a fetch fails

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, fetch guard, debounce            │
//! │  - Status snapshot, view model computation          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Client Layer  │
//! │ (ui/)         │   │ (store/)      │   │ (client/)     │
//! │ - Card render │   │ - Records     │   │ - Requests    │
//! │ - Theming     │   │ - Filter      │   │ - Decoding    │
//! │ - Components  │   │ - Paginator   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - AuthorRecord, error types (domain/)              │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans exported as OTLP JSON lines  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the shim calls the host, so the whole pipeline runs and is
//! tested natively.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/authorgrid.wasm" {
//!         endpoint "https://cdn.freecodecamp.org/curriculum/news-author-page/authors.json"
//!         page_size "8"
//!         search_debounce_ms "300"
//!         stale_check_interval_secs "60"
//!         stale_after_secs "300"
//!         theme "terminal"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use authorgrid::{handle_event, initialize, Action, Config, Event};
//! use chrono::Utc;
//!
//! let mut state = initialize(&Config::default(), Utc::now());
//! let (_, actions) = handle_event(&mut state, &Event::InitialLoad { at: Utc::now() })?;
//!
//! for action in actions {
//!     match action {
//!         Action::Fetch(request) => assert!(request.url.starts_with("https://")),
//!         Action::ScheduleTimer { .. } | Action::Close => {}
//!     }
//! }
//! # Ok::<(), authorgrid::AuthorGridError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState, StatusSnapshot};
pub use domain::{AuthorGridError, AuthorRecord, FetchError, Result};
pub use ui::Theme;

use app::DEFAULT_SEARCH_DEBOUNCE_MS;
use chrono::{DateTime, Utc};
use client::DEFAULT_ENDPOINT;
use std::collections::BTreeMap;
use store::DEFAULT_PAGE_SIZE;

/// Default interval between staleness checks.
pub const DEFAULT_STALE_CHECK_INTERVAL_SECS: u64 = 60;

/// Default age after which the directory is refetched.
pub const DEFAULT_STALE_AFTER_SECS: u64 = 300;

/// Upper bound for both staleness settings (one year).
pub const MAX_STALE_SECS: u64 = 365 * 24 * 60 * 60;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/authorgrid.wasm" {
///     page_size "12"
///     theme_file "~/.config/authorgrid/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory URL. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Cards per page, at least 1. Default: 8
    pub page_size: usize,

    /// Quiet period before typed search text is applied. Default: 300
    pub search_debounce_ms: u64,

    /// Seconds between staleness checks, 1 to [`MAX_STALE_SECS`]. Default: 60
    pub stale_check_interval_secs: u64,

    /// Age in seconds after which visible data is refetched, at most
    /// [`MAX_STALE_SECS`]. Default: 300
    pub stale_after_secs: u64,

    /// Built-in theme name: `terminal`, `catppuccin-mocha` or
    /// `catppuccin-latte`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            stale_check_interval_secs: DEFAULT_STALE_CHECK_INTERVAL_SECS,
            stale_after_secs: DEFAULT_STALE_AFTER_SECS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank or unparsable values fall back to their defaults, and
    /// each fallback is logged at debug level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use authorgrid::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("stale_after_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.stale_after_secs, 300);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let endpoint = match non_blank(config, "endpoint").map(validate_endpoint) {
            None => defaults.endpoint,
            Some(Ok(endpoint)) => endpoint,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "using default endpoint");
                defaults.endpoint
            }
        };

        Self {
            endpoint,
            page_size: parse_or(config, "page_size", defaults.page_size).max(1),
            search_debounce_ms: parse_or(config, "search_debounce_ms", defaults.search_debounce_ms),
            stale_check_interval_secs: parse_or(
                config,
                "stale_check_interval_secs",
                defaults.stale_check_interval_secs,
            )
            .clamp(1, MAX_STALE_SECS),
            stale_after_secs: parse_or(config, "stale_after_secs", defaults.stale_after_secs)
                .min(MAX_STALE_SECS),
            theme_name: non_blank(config, "theme").map(str::to_string),
            theme_file: non_blank(config, "theme_file").map(str::to_string),
            trace_level: non_blank(config, "trace_level").map(str::to_string),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Loading failures are logged and fall back to [`Theme::default`].
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Accepts absolute `http` and `https` URLs only.
///
/// # Errors
///
/// [`AuthorGridError::Config`] for any other value.
pub fn validate_endpoint(raw: &str) -> Result<String> {
    let has_host = |rest: &str| !rest.is_empty() && !rest.starts_with('/');
    match raw.split_once("://") {
        Some(("http" | "https", rest)) if has_host(rest) => Ok(raw.to_string()),
        _ => Err(AuthorGridError::Config(format!(
            "endpoint must be an http(s) URL, got {raw:?}"
        ))),
    }
}

fn non_blank<'a>(config: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    config.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr + Copy>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match non_blank(config, key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(key = key, value = raw, "invalid configuration value, using default");
            default
        }),
    }
}

/// Builds the startup state for a configuration.
///
/// Resolves the theme and leaves the state `Idle`; the first fetch starts
/// with `Event::InitialLoad` once web access is granted.
pub fn initialize(config: &Config, now: DateTime<Utc>) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "initializing authorgrid plugin");

    AppState::new(config, config.load_theme(), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed_and_clamped() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://example.test/authors.json "),
            ("page_size", "0"),
            ("search_debounce_ms", "150"),
            ("stale_check_interval_secs", "0"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "  "),
        ]));

        assert_eq!(config.endpoint, "https://example.test/authors.json");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.stale_check_interval_secs, 1);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn staleness_settings_are_capped() {
        let config = Config::from_zellij(&map(&[
            ("stale_after_secs", "10000000000000000"),
            ("stale_check_interval_secs", "9000000000000000"),
        ]));

        assert_eq!(config.stale_after_secs, MAX_STALE_SECS);
        assert_eq!(config.stale_check_interval_secs, MAX_STALE_SECS);

        let state = initialize(&config, Utc::now());
        assert_eq!(state.stale_after, chrono::Duration::days(365));
    }

    #[test]
    fn invalid_endpoint_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("endpoint", "ftp://example.test/a.json")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        assert!(matches!(
            validate_endpoint("https:///authors.json"),
            Err(AuthorGridError::Config(_))
        ));
        assert!(validate_endpoint("http://localhost:8080/authors.json").is_ok());
    }

    #[test]
    fn theme_resolution_prefers_file_then_name() {
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&latte).unwrap()).unwrap();

        let from_file = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(from_file.load_theme().name, "catppuccin-latte");

        let by_name = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(by_name.load_theme().name, "catppuccin-mocha");

        let unknown = Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.load_theme(), Theme::default());
    }

    #[test]
    fn initialize_starts_idle_with_configured_page_size() {
        let config = Config {
            page_size: 4,
            ..Config::default()
        };
        let state = initialize(&config, Utc::now());

        assert_eq!(state.load_state, LoadState::Idle);
        assert_eq!(state.paginator.page_size(), 4);
    }
}
