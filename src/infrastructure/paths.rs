//! Path helpers for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
///
/// `/host` is the cwd of the last focused terminal (usually the home
/// directory), so this is normally `~/.local/share/zellij/authorgrid`.
///
/// ```rust
/// use authorgrid::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/authorgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("authorgrid")
}

/// Maps a leading `~` to the sandbox's `/host` mount.
///
/// ```rust
/// use authorgrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/.config/authorgrid/theme.toml"), "/host/.config/authorgrid/theme.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_leading_home_tilde_is_expanded() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
        assert_eq!(expand_tilde("~/"), "/host/");
    }
}
