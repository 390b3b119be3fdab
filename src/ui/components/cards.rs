//! Author card list renderer.
//!
//! Each card takes five rows:
//!
//! ```text
//!   ◉ Quincy Larson
//!     Educator and founder of a nonprofit that helps people learn
//!     to code for free...
//!     VIEW_PROFILE →  https://www.freecodecamp.org/news/author/quincy
//!
//! ```
//!
//! The selected card gets a `▌` gutter mark and selection colors on its name.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, LoadMoreInfo};

/// Bio rows reserved per card, filled or not.
const BIO_ROWS: usize = 2;

/// Renders all cards starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_cards(row: usize, cards: &[CardView], theme: &Theme) -> usize {
    cards
        .iter()
        .fold(row, |current, card| render_card(current, card, theme))
}

fn render_card(row: usize, card: &CardView, theme: &Theme) -> usize {
    position_cursor(row, 1);
    if card.is_selected {
        print!("{}▌ {}", Theme::fg(&theme.colors.accent), Theme::reset());
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{}", Theme::bold());
    print!("{} {}", card.avatar, card.name);
    print!("{}", Theme::reset());

    for line in 0..BIO_ROWS {
        position_cursor(row + 1 + line, 1);
        if let Some(text) = card.bio_lines.get(line) {
            print!("    {}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        }
    }

    position_cursor(row + 1 + BIO_ROWS, 1);
    print!("    ");
    print!("{}{}", Theme::underline(), Theme::fg(&theme.colors.link_fg));
    print!("{}", card.link);
    print!("{}", Theme::reset());

    // name, bio, link, separator
    row + BIO_ROWS + 3
}

/// Renders the load-more control centered at `row`; hidden when its label
/// is empty.
pub fn render_load_more(row: usize, load_more: &LoadMoreInfo, theme: &Theme, cols: usize) -> usize {
    if load_more.label.is_empty() {
        return row + 1;
    }

    let len = load_more.label.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    if load_more.enabled {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", load_more.label);
    print!("{}", Theme::reset());
    row + 1
}
