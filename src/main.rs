//! Zellij plugin shim.
//!
//! Translates host events into [`authorgrid::Event`]s, feeds them to
//! [`authorgrid::handle_event`] and performs the returned actions through
//! the host API. Everything else lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, start tracing, build `AppState`
//! 2. **Permissions**: request `WebAccess`; the first fetch waits for the grant
//! 3. **Update**: map host events, run the handler, execute actions
//! 4. **Render**: draw the view model
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::InitialLoad`
//! - `PermissionRequestResult(Denied)` → `Event::PermissionDenied`
//! - `WebRequestResult` → `Event::FetchCompleted`
//! - `Timer` → `Event::TimerFired`
//! - `Visible` → `Event::VisibilityChanged`
//!
//! # Keybindings
//!
//! Browsing:
//! - `/`: Focus the search bar
//! - `Space`/`m`/`l`: Load more
//! - `r`/`F5`/`Ctrl+r`: Refresh, or retry after a failure
//! - `j`/`Down`, `k`/`Up`: Move the highlight
//! - `q`/`Esc`: Close
//!
//! Searching:
//! - Characters and `Backspace`: Edit the query (applied after 300ms)
//! - `Enter`: Apply now and return to browsing
//! - `Esc`: Clear the query and return to browsing

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(target_family = "wasm")]
mod plugin {
    use authorgrid::{handle_event, Action, Config, Event, InputMode, LoadState};
    use chrono::Utc;
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    pub struct State {
        app: authorgrid::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: authorgrid::initialize(&Config::default(), Utc::now()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            authorgrid::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "parsed configuration");
            self.app = authorgrid::initialize(&config, Utc::now());

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::Timer,
                EventType::Visible,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for web access permission");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let Some(our_event) = self.map_event(event) else {
                return false;
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            authorgrid::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
                zellij_tile::prelude::Event::Visible(..) => "Visible".to_string(),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        fn map_event(&self, event: zellij_tile::prelude::Event) -> Option<Event> {
            let at = Utc::now();
            match event {
                zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    tracing::debug!("web access granted - starting initial load");
                    Some(Event::InitialLoad { at })
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("web access denied - directory cannot be fetched");
                    Some(Event::PermissionDenied)
                }
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    Some(Event::FetchCompleted {
                        status,
                        body,
                        context,
                        at,
                    })
                }
                zellij_tile::prelude::Event::Timer(_) => Some(Event::TimerFired { at }),
                zellij_tile::prelude::Event::Visible(visible) => {
                    Some(Event::VisibilityChanged(visible))
                }
                _ => None,
            }
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            let at = Utc::now();

            if self.app.input_mode == InputMode::Search {
                return Some(match key.bare_key {
                    BareKey::Enter => Event::SubmitSearch,
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Backspace => Event::SearchBackspace { at },
                    BareKey::Char(ch) if !key.has_modifiers(&[KeyModifier::Ctrl]) => {
                        Event::SearchChar { ch, at }
                    }
                    _ => return None,
                });
            }

            let refresh = if self.app.load_state == LoadState::Errored {
                Event::Retry { at }
            } else {
                Event::Refresh { at }
            };

            if key.bare_key == BareKey::Char('r') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(refresh);
            }

            Some(match key.bare_key {
                BareKey::Char('/') => Event::EnterSearch,
                BareKey::Char(' ' | 'm' | 'l') => Event::LoadMore,
                BareKey::Char('r') | BareKey::F(5) => refresh,
                BareKey::Down | BareKey::Char('j') => Event::SelectNext,
                BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
                BareKey::Char('q') | BareKey::Esc => Event::Close,
                _ => return None,
            })
        }

        fn execute_action(action: &Action) {
            match action {
                Action::Fetch(request) => {
                    tracing::debug!(request_id = request.id, url = %request.url, "issuing web request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        request.headers.clone(),
                        vec![],
                        request.context.clone(),
                    );
                }
                Action::ScheduleTimer { after } => set_timeout(after.as_secs_f64()),
                Action::Close => hide_self(),
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "authorgrid is a Zellij plugin: build it with `cargo build --release --target wasm32-wasip1` \
         and load target/wasm32-wasip1/release/authorgrid.wasm from a layout"
    );
}
