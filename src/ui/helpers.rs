//! Shared rendering utilities.
//!
//! Cursor positioning plus the text fitting used by the card layout. All
//! width arithmetic counts characters, not bytes, so multi-byte names and
//! biographies never split inside a code point.
//!
//! # Example
//!
//! ```rust
//! use authorgrid::ui::helpers::wrap_text;
//!
//! let lines = wrap_text("writes about rust and wasm", 12, 2);
//! assert_eq!(lines, vec!["writes about", "rust and..."]);
//! ```

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to at most `width` characters, marking the cut with `...`.
///
/// ```rust
/// use authorgrid::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Quincy Larson", 9), "Quincy...");
/// assert_eq!(truncate_to_width("Ada", 9), "Ada");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Greedy word wrap into at most `max_lines` lines of `width` characters.
///
/// Words longer than a line are hard-split. When the text does not fit, the
/// last line is truncated with `...`.
#[must_use]
pub fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while !word.is_empty() {
            let sep = usize::from(current_len > 0);
            if current_len + sep + word.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(word.iter());
                current_len += sep + word.len();
                word.clear();
            } else if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            } else {
                let rest = word.split_off(width);
                current.extend(word.iter());
                lines.push(std::mem::take(&mut current));
                word = rest;
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut marked: String = last.chars().take(width.saturating_sub(3)).collect();
            marked.push_str("...");
            *last = marked;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_words_per_line() {
        assert_eq!(
            wrap_text("one two three four", 9, 5),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij", 4, 5), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_marks_overflow_on_last_line() {
        let lines = wrap_text("aaa bbb ccc ddd", 7, 1);
        assert_eq!(lines, vec!["aaa ..."]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 10, 2).is_empty());
        assert!(wrap_text("text", 0, 2).is_empty());
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_to_width("ééééé", 4), "é...");
        assert_eq!(truncate_to_width("abcdef", 2), "ab");
    }
}
