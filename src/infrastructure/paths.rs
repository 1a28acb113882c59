//! Path handling for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Directory holding the trace file: `/host/.local/share/zellij/bookpilot`.
///
/// `/host` is the cwd of the last focused terminal (usually the user's home),
/// so this is normally `~/.local/share/zellij/bookpilot` on the host.
///
/// ```
/// use bookpilot::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/bookpilot"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookpilot")
}

/// Maps a leading `~` to `/host`.
///
/// ```
/// use bookpilot::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
