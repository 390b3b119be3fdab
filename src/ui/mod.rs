//! User interface layer.
//!
//! Two halves live here. [`cards`] is the pure card renderer that turns
//! records into grid entries and applies them to a [`cards::RenderTarget`].
//! Everything else draws the application state into the plugin pane:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`cards`]: records to grid entries, bio excerpts, error panel content
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, search box, cards, placeholders, status bar
//! - [`helpers`]: cursor positioning and text fitting
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod cards;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::UIViewModel;
