//! Footer and status bar renderers.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatusBarInfo};

/// Renders the keybinding hints centered at `row`.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_to_width(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders load state, connection and last update on one line.
///
/// The connection segment uses the error color when it reports an alert,
/// the success color otherwise. Segments that do not fit are dropped from
/// the right.
pub fn render_status_bar(row: usize, status: &StatusBarInfo, theme: &Theme, cols: usize) -> usize {
    let connection_color = if status.connection_alert {
        &theme.colors.error_fg
    } else {
        &theme.colors.success_fg
    };

    let segments = [
        (status.load_state.as_str(), &theme.colors.text_normal),
        (status.connection.as_str(), connection_color),
        (status.last_update.as_str(), &theme.colors.text_dim),
    ];

    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;
    for (text, color) in segments {
        let len = text.chars().count() + 3;
        if used + len > cols {
            break;
        }
        print!("{}{text}{}   ", Theme::fg(color), Theme::reset());
        used += len;
    }
    row + 1
}
