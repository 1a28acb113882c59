//! End-to-end flows through the public API: typing a query, receiving catalog
//! responses, toggling favorites, and handing the briefing to an assistant.

use bookpilot::assistant::{AssistantConfig, AssistantWidget};
use bookpilot::{handle_event, initialize, Action, BookpilotError, Config, Event, Pane};
use std::collections::BTreeMap;

/// Widget that remembers every configuration it was given.
#[derive(Default)]
struct RecordingWidget {
    configs: Vec<AssistantConfig>,
    opened: usize,
    fail: bool,
}

impl AssistantWidget for RecordingWidget {
    fn configure(&mut self, config: AssistantConfig) {
        self.configs.push(config);
    }

    fn open(&mut self) -> bookpilot::Result<()> {
        if self.fail {
            return Err(BookpilotError::Assistant("no command".to_string()));
        }
        self.opened += 1;
        Ok(())
    }
}

const FANTASY: &str = r#"{
  "kind": "books#volumes",
  "totalItems": 2,
  "items": [
    {
      "id": "hobbit",
      "volumeInfo": {
        "title": "The Hobbit",
        "authors": ["J. R. R. Tolkien"],
        "description": "In a hole in the ground there lived a hobbit.",
        "imageLinks": { "thumbnail": "http://books.example/hobbit.jpg" }
      }
    },
    {
      "id": "earthsea",
      "volumeInfo": { "title": "A Wizard of Earthsea", "authors": [] }
    }
  ]
}"#;

struct Session {
    state: bookpilot::AppState,
    widget: RecordingWidget,
}

impl Session {
    fn new() -> Self {
        let mut config = Config::from_zellij(&BTreeMap::from([(
            "assistant_title".to_string(),
            "Librarian".to_string(),
        )]));
        config.max_results = Some(10);
        Self {
            state: initialize(&config),
            widget: RecordingWidget::default(),
        }
    }

    /// Feeds an event and plays the plugin shim's part for the actions.
    fn send(&mut self, event: Event) -> Vec<Action> {
        let (_, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in &actions {
            if let Action::OpenAssistant(config) = action {
                self.widget.configure(config.clone());
                if let Err(e) = self.widget.open() {
                    handle_event(&mut self.state, &Event::AssistantFailed { error: e.to_string() }).unwrap();
                }
            }
        }
        self.widget.configure(self.state.assistant_config());
        actions
    }

    fn search(&mut self, query: &str) -> (u64, String) {
        self.send(Event::EditQuery);
        while !self.state.query.is_empty() {
            self.send(Event::Backspace);
        }
        for c in query.chars() {
            self.send(Event::Char(c));
        }
        match self.send(Event::SubmitQuery).as_slice() {
            [Action::FetchCatalog(request)] => (request.id, request.url.clone()),
            other => panic!("expected a catalog fetch, got {other:?}"),
        }
    }

    fn respond(&mut self, request_id: u64, status: u16, body: &str) {
        self.send(Event::SearchCompleted {
            request_id,
            status,
            body: body.as_bytes().to_vec(),
        });
    }

    fn latest_instructions(&self) -> &str {
        &self.widget.configs.last().unwrap().instructions
    }
}

#[test]
fn search_favorite_and_brief_the_assistant() {
    let mut session = Session::new();

    let (id, url) = session.search("the hobbit");
    assert_eq!(
        url,
        "https://www.googleapis.com/books/v1/volumes?q=the%20hobbit&maxResults=10"
    );
    assert!(session.state.search().is_loading());

    session.respond(id, 200, FANTASY);
    assert!(session
        .latest_instructions()
        .contains("\nCurrent search results:\n• \"The Hobbit\" by J. R. R. Tolkien\n• \"A Wizard of Earthsea\" by Unknown author(s)"));
    assert!(session.latest_instructions().contains("Favorites list is empty."));

    session.send(Event::KeyDown);
    session.send(Event::ToggleFavorite);
    assert!(session
        .latest_instructions()
        .contains("User's favorites:\n• \"A Wizard of Earthsea\" by Unknown author(s)"));

    session.send(Event::OpenAssistant);
    assert_eq!(session.widget.opened, 1);
    let config = session.widget.configs.last().unwrap();
    assert_eq!(config.labels.title, "Librarian");
    assert_eq!(config.labels.initial, "Ask about your favorite or new books!");
}

#[test]
fn favorites_survive_new_searches_and_failures() {
    let mut session = Session::new();

    let (id, _) = session.search("hobbit");
    session.respond(id, 200, FANTASY);
    session.send(Event::ToggleFavorite);

    let (id, _) = session.search("nothing at all");
    session.respond(id, 200, r#"{"kind":"books#volumes","totalItems":0}"#);
    assert_eq!(session.state.search().error(), Some("No results found"));
    assert!(session.state.search().results().is_empty());
    assert!(session.state.is_favorited("hobbit"));
    assert!(session.latest_instructions().contains("No current search results."));
    assert!(session.latest_instructions().contains("\"The Hobbit\" by J. R. R. Tolkien"));

    let (id, _) = session.search("hobbit");
    session.respond(id, 503, "Service Unavailable");
    assert_eq!(
        session.state.search().error(),
        Some("An error occurred while searching for books.")
    );
    assert_eq!(session.state.favorites().len(), 1);
}

#[test]
fn late_response_from_older_search_is_ignored() {
    let mut session = Session::new();

    let (first, _) = session.search("hobbit");
    let (second, _) = session.search("earthsea");
    session.respond(second, 200, r#"{"items":[{"id":"earthsea","volumeInfo":{"title":"A Wizard of Earthsea"}}]}"#);
    session.respond(first, 200, FANTASY);

    let ids: Vec<&str> = session
        .state
        .search()
        .results()
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["earthsea"]);
    assert_eq!(session.state.search().query(), "earthsea");
}

#[test]
fn unfavorite_from_favorites_pane() {
    let mut session = Session::new();
    let (id, _) = session.search("hobbit");
    session.respond(id, 200, FANTASY);
    session.send(Event::ToggleFavorite);
    session.send(Event::KeyDown);
    session.send(Event::ToggleFavorite);
    assert_eq!(session.state.favorites().len(), 2);

    session.send(Event::SwitchPane);
    assert_eq!(session.state.focus, Pane::Favorites);
    session.send(Event::ToggleFavorite);

    let remaining: Vec<&str> = session
        .state
        .favorites()
        .as_slice()
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(remaining, ["earthsea"]);
    assert_eq!(session.state.search().results().len(), 2);
}

#[test]
fn assistant_failure_becomes_a_notice() {
    let mut session = Session::new();
    session.widget.fail = true;
    session.send(Event::OpenAssistant);

    assert_eq!(session.widget.opened, 0);
    let notice = session.state.notice.clone().unwrap();
    assert!(notice.contains("no command"));

    let screen = bookpilot::ui::renderer::frame(&session.state, 30, 120);
    assert!(screen.contains("Assistant unavailable"));
}
