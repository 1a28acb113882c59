//! Zellij plugin wrapper and entry point.
//!
//! This is the thin layer between the Bookpilot library and the Zellij plugin
//! system: it turns Zellij events into library events and library actions into
//! Zellij calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request web access, command panes, and pane control
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Hand the assistant its latest configuration, draw the UI
//!
//! # Event Mapping
//!
//! - `Key(..)` → navigation, editing, and command events (see below)
//! - `WebRequestResult` → `Event::SearchCompleted` (request id from context)
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//! - `CommandPaneOpened` → names the assistant pane after its labels
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `Tab`: Switch between results and favorites
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `/`: Edit the query
//! - `f`/`Space`/`Enter`: Toggle favorite
//! - `a`: Open the assistant
//! - `q`/`Esc`: Hide the plugin
//!
//! While editing:
//! - Characters and `Backspace` edit the query
//! - `Enter`: Search
//! - `Esc`: Stop editing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use zellij_tile::prelude::*;

use bookpilot::assistant::{AssistantConfig, AssistantWidget};
use bookpilot::catalog::SearchRequest;
use bookpilot::{handle_event, Action, BookpilotError, Config, Event, InputMode};

register_plugin!(State);

/// Context key tagging the assistant's command pane with its display name.
const ASSISTANT_PANE_KEY: &str = "bookpilot_assistant";

/// Assistant shown as a floating command pane.
///
/// The configured command is run with the instructions as its last argument.
/// Once Zellij reports the pane open, it is renamed after the label pair.
#[derive(Default)]
struct CommandPaneAssistant {
    command: Vec<String>,
    config: Option<AssistantConfig>,
}

impl AssistantWidget for CommandPaneAssistant {
    fn configure(&mut self, config: AssistantConfig) {
        self.config = Some(config);
    }

    fn open(&mut self) -> bookpilot::Result<()> {
        let Some((program, leading)) = self.command.split_first() else {
            return Err(BookpilotError::Assistant(
                "set assistant_command in the plugin configuration".to_string(),
            ));
        };
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| BookpilotError::Assistant("assistant not configured yet".to_string()))?;

        let mut args = leading.to_vec();
        args.push(config.instructions.clone());

        tracing::debug!(program = %program, title = %config.labels.title, "opening assistant pane");
        open_command_pane_floating(
            CommandToRun {
                path: PathBuf::from(program),
                args,
                cwd: None,
            },
            None,
            BTreeMap::from([(ASSISTANT_PANE_KEY.to_string(), config.labels.pane_name())]),
        );
        Ok(())
    }
}

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: bookpilot::AppState,

    /// Where the assistant is shown.
    assistant: CommandPaneAssistant,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookpilot::initialize(&Config::default()),
            assistant: CommandPaneAssistant::default(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookpilot::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = bookpilot::initialize(&config);
        self.assistant.command.clone_from(&config.assistant_command);
        tracing::debug!(
            endpoint = %config.endpoint,
            has_api_key = config.api_key.is_some(),
            assistant = ?config.assistant_command.first(),
            "plugin configured"
        );

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::RunCommands,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::CommandPaneOpened,
        ]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                let Some(request_id) = SearchRequest::id_from_context(&context) else {
                    tracing::debug!(status, "ignoring untagged web response");
                    return false;
                };
                Event::SearchCompleted {
                    request_id,
                    status,
                    body,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            zellij_tile::prelude::Event::CommandPaneOpened(pane_id, context) => {
                if let Some(name) = context.get(ASSISTANT_PANE_KEY) {
                    tracing::debug!(pane_id, name = %name, "naming assistant pane");
                    rename_terminal_pane(pane_id, name);
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.assistant.configure(self.app.assistant_config());
        bookpilot::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((mut should_render, actions)) => {
                for action in actions {
                    if let Some(follow_up) = self.execute_action(action) {
                        should_render |= self.dispatch(&follow_up);
                    }
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::CommandPaneOpened(..) => "CommandPaneOpened".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events, depending on input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match (self.app.input_mode, &key.bare_key) {
            (_, BareKey::Down) => Some(Event::KeyDown),
            (_, BareKey::Up) => Some(Event::KeyUp),
            (_, BareKey::Tab) => Some(Event::SwitchPane),

            (InputMode::Editing, BareKey::Enter) => Some(Event::SubmitQuery),
            (InputMode::Editing, BareKey::Esc) => Some(Event::Escape),
            (InputMode::Editing, BareKey::Backspace) => Some(Event::Backspace),
            (InputMode::Editing, BareKey::Char(c)) => Some(Event::Char(*c)),

            (InputMode::Normal, BareKey::Char('j')) => Some(Event::KeyDown),
            (InputMode::Normal, BareKey::Char('k')) => Some(Event::KeyUp),
            (InputMode::Normal, BareKey::Char('/')) => Some(Event::EditQuery),
            (InputMode::Normal, BareKey::Char('f' | ' ') | BareKey::Enter) => {
                Some(Event::ToggleFavorite)
            }
            (InputMode::Normal, BareKey::Char('a')) => Some(Event::OpenAssistant),
            (InputMode::Normal, BareKey::Char('q') | BareKey::Esc) => Some(Event::CloseFocus),

            _ => None,
        }
    }

    /// Translates a library action into Zellij calls.
    ///
    /// Returns an event to feed back into the handler when the action failed.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                hide_self();
                None
            }
            Action::FetchCatalog(request) => {
                tracing::debug!(request_id = request.id, url = %request.url, "issuing catalog request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
                None
            }
            Action::OpenAssistant(config) => {
                self.assistant.configure(config);
                self.assistant.open().err().map(|e| Event::AssistantFailed {
                    error: match e {
                        BookpilotError::Assistant(reason) => reason,
                        other => other.to_string(),
                    },
                })
            }
        }
    }
}
