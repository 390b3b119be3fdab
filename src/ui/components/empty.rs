//! Placeholder and error panel renderers.
//!
//! Both draw centered text in the main area, starting a few rows below
//! `row` so the message sits in the upper middle of the pane.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorView};

/// Blank rows above centered messages.
const TOP_GAP: usize = 2;

fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate_to_width(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Renders a placeholder message with a dimmed subtitle.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let first = row + TOP_GAP;
    centered_line(first, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    centered_line(
        first + 1,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
}

/// Renders the error panel of a failed fetch.
///
/// ```text
///              ✖ NETWORK_ERROR
///        Failed to load authors data
///            Error: HTTP 500
///
///       [ RETRY_CONNECTION ]  (press r)
/// ```
pub fn render_error_panel(row: usize, error: &ErrorView, theme: &Theme, cols: usize) {
    let first = row + TOP_GAP;
    let alert = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));

    centered_line(first, &format!("✖ {}", error.title), &alert, cols);
    centered_line(first + 1, &error.message, &Theme::fg(&theme.colors.text_normal), cols);
    centered_line(first + 2, &error.detail, &Theme::fg(&theme.colors.text_dim), cols);
    centered_line(
        first + 4,
        &format!("[ {} ]", error.action),
        &Theme::fg(&theme.colors.accent),
        cols,
    );
}
