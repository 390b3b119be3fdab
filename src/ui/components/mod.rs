//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar and directory statistics
//! - [`search`]: search input box
//! - [`cards`]: author cards and the load-more control
//! - [`empty`]: placeholders and the error panel
//! - [`footer`]: status bar and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Header stats]
//! [Border]
//! [Search Bar - 3 lines, when shown]
//! [Cards | Placeholder | Error panel]
//! [Load more]
//! [Border]
//! [Status bar]
//! [Footer]
//! ```

mod cards;
mod empty;
mod footer;
mod header;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use cards::{render_cards, render_load_more};
use empty::{render_empty_state, render_error_panel};
use footer::{render_footer, render_status_bar};
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border at `row`, returning the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for a pane of `rows` x `cols`.
///
/// The bottom chrome (load-more, border, status bar, footer) is anchored to
/// the last four rows regardless of how many cards are drawn.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    match &vm.body {
        Body::Cards { cards, position } => {
            render_cards(current_row, cards, theme);
            let position_col = cols.saturating_sub(position.chars().count() + 1).max(1);
            position_cursor(current_row.saturating_sub(1).max(1), position_col);
            print!("{}{position}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
        Body::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        Body::Error(error) => render_error_panel(current_row, error, theme, cols),
    }

    let footer_row = rows;
    let status_row = footer_row.saturating_sub(1);
    let border_row = status_row.saturating_sub(1);
    let load_more_row = border_row.saturating_sub(1);

    render_load_more(load_more_row, &vm.load_more, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_status_bar(status_row, &vm.status_bar, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
