//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are plain TOML documents. Three are built in; any other can
//! be loaded from a file named by the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `terminal`: green-on-black console look (default)
//! - `catppuccin-mocha`: dark theme with warm tones
//! - `catppuccin-latte`: light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#33ff66"
//! text_normal = "#c8facc"
//! text_dim = "#5f8f66"
//! border = "#1f5f2a"
//! accent = "#33ff66"
//! link_fg = "#66ccff"
//! selection_fg = "#000000"
//! selection_bg = "#33ff66"
//! search_bar_border = "#33ff66"
//! empty_state_fg = "#66ccff"
//! error_fg = "#ff5555"
//! success_fg = "#33ff66"
//! ```
//!
//! # Example
//!
//! ```rust
//! use authorgrid::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}AUTHORS{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! ```

use crate::domain::{AuthorGridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "terminal";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title and stats text.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text (biographies).
    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Author names and the load-more control.
    pub accent: String,
    /// Profile links.
    pub link_fg: String,

    /// Highlighted card.
    pub selection_fg: String,
    pub selection_bg: String,

    pub search_bar_border: String,

    /// Placeholder messages.
    pub empty_state_fg: String,

    /// Error panel and alert statuses.
    pub error_fg: String,
    /// Healthy statuses.
    pub success_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "terminal" => include_str!("../../themes/terminal.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`AuthorGridError::Io`] when the file cannot be read and
    /// [`AuthorGridError::Theme`] when it is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| AuthorGridError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape sequence for a hex color.
    ///
    /// ```rust
    /// use authorgrid::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in `terminal` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in terminal theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for name in ["terminal", "catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trips_builtin() {
        let theme = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), theme);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(AuthorGridError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/nonexistent/theme.toml"),
            Err(AuthorGridError::Io(_))
        ));
    }
}
