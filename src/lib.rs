//! Bookpilot: a Zellij plugin for searching books, keeping favorites, and
//! briefing an assistant about both.
//!
//! Bookpilot provides:
//! - Catalog search against the Google Books volumes API
//! - A session favorites list that survives new searches
//! - A session summary that keeps the assistant's instructions current

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - web_request / WebRequestResult                   │
//! │  - assistant command pane                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Search controller, favorites                     │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Assistant     │
//! │ (ui/)         │   │ (catalog/)    │   │ (assistant/)  │
//! │ - Rendering   │   │ - URL build   │   │ - Summary     │
//! │ - Theming     │   │ - Decoding    │   │ - Bridge      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookpilot.wasm" {
//!         api_key "..."
//!         max_results "20"
//!         assistant_command "aichat --session books --prompt"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookpilot::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::EditQuery)?;
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::SubmitQuery)?;
//! let Some(Action::FetchCatalog(request)) = actions.first() else { unreachable!() };
//!
//! let body = br#"{"items":[{"id":"x","volumeInfo":{"title":"Dune"}}]}"#.to_vec();
//! handle_event(&mut state, &Event::SearchCompleted { request_id: request.id, status: 200, body })?;
//! assert_eq!(state.search().results().len(), 1);
//! # Ok::<(), bookpilot::BookpilotError>(())
//! ```

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Pane};
pub use domain::{BookItem, BookpilotError, Result};
pub use ui::Theme;

use assistant::AssistantLabels;
use catalog::{CatalogClient, DEFAULT_ENDPOINT};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog volumes endpoint.
    pub endpoint: String,

    /// Google Books API key, sent as `key=`.
    pub api_key: Option<String>,

    /// Page size sent as `maxResults=` (1..=40). `None` uses the API default.
    pub max_results: Option<u32>,

    /// Command (program and leading arguments) launched as the assistant.
    ///
    /// The instructions are appended as the final argument. Empty when not
    /// configured.
    pub assistant_command: Vec<String>,

    /// Assistant title label.
    pub assistant_title: Option<String>,

    /// Assistant greeting label.
    pub assistant_greeting: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            max_results: None,
            assistant_command: Vec::new(),
            assistant_title: None,
            assistant_greeting: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys take their defaults. Malformed values are logged and
    /// ignored rather than failing the plugin load.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookpilot::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("max_results".to_string(), "20".to_string());
    /// map.insert("assistant_command".to_string(), "aichat --prompt".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.max_results, Some(20));
    /// assert_eq!(config.assistant_command, vec!["aichat", "--prompt"]);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_results = non_blank("max_results").and_then(|raw| {
            parse_max_results(&raw)
                .map_err(|e| tracing::warn!(error = %e, "ignoring max_results"))
                .ok()
        });

        Self {
            endpoint: non_blank("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key: non_blank("api_key"),
            max_results,
            assistant_command: config
                .get("assistant_command")
                .map(|s| s.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
            assistant_title: non_blank("assistant_title"),
            assistant_greeting: non_blank("assistant_greeting"),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
        }
    }

    /// Catalog client for this configuration.
    #[must_use]
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(self.endpoint.clone())
            .with_api_key(self.api_key.clone())
            .with_max_results(self.max_results)
    }

    /// Assistant labels, with defaults for anything not overridden.
    #[must_use]
    pub fn assistant_labels(&self) -> AssistantLabels {
        let defaults = AssistantLabels::default();
        AssistantLabels {
            title: self.assistant_title.clone().unwrap_or(defaults.title),
            initial: self.assistant_greeting.clone().unwrap_or(defaults.initial),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_max_results(raw: &str) -> Result<u32> {
    let value: u32 = raw
        .parse()
        .map_err(|_| BookpilotError::Config(format!("max_results must be a number, got {raw:?}")))?;
    if value == 0 {
        return Err(BookpilotError::Config("max_results must be at least 1".to_string()));
    }
    Ok(value)
}

/// Creates a fresh session from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing bookpilot");
    AppState::new(config.theme(), config.catalog(), config.assistant_labels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = Config::from_zellij(&map(&[
            ("max_results", "lots"),
            ("api_key", "   "),
            ("endpoint", ""),
        ]));
        assert_eq!(config.max_results, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(matches!(parse_max_results("0"), Err(BookpilotError::Config(_))));
    }

    #[test]
    fn catalog_uses_configured_endpoint_and_key() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:9000/volumes"),
            ("api_key", "secret"),
            ("max_results", "99"),
        ]));
        let url = config.catalog().search_url("dune");
        assert!(url.starts_with("http://localhost:9000/volumes?q=dune"));
        assert!(url.contains("maxResults=40"));
        assert!(url.contains("key=secret"));
    }

    #[test]
    fn labels_fall_back_per_field() {
        let config = Config::from_zellij(&map(&[("assistant_title", "Librarian")]));
        let labels = config.assistant_labels();
        assert_eq!(labels.title, "Librarian");
        assert_eq!(labels.initial, assistant::DEFAULT_GREETING);
    }

    #[test]
    fn theme_resolution_order() {
        assert_eq!(Config::default().theme().name, "catppuccin-mocha");

        let named = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(named.theme().name, "catppuccin-latte");

        let unknown = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(unknown.theme().name, "catppuccin-mocha");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme::from_name("catppuccin-frappe").unwrap())
            .unwrap()
            .replacen("catppuccin-frappe", "custom", 1);
        file.write_all(custom.as_bytes()).unwrap();
        let path = file.path().to_string_lossy().to_string();
        let from_file = Config::from_zellij(&map(&[("theme", "catppuccin-latte"), ("theme_file", &path)]));
        assert_eq!(from_file.theme().name, "custom");
    }
}
