//! Outbound catalog request construction.
//!
//! The plugin never performs HTTP itself: it builds a [`SearchRequest`] and the
//! plugin shim hands it to Zellij's `web_request` host call. The request id
//! travels in the request context and comes back with the response, which is
//! how stale responses are recognized.

use std::collections::BTreeMap;

/// Default catalog endpoint (Google Books volumes search).
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Context key carrying the request id through the host round-trip.
pub const REQUEST_ID_KEY: &str = "bookpilot_request_id";

/// Upper bound the Google Books API accepts for `maxResults`.
const MAX_RESULTS_LIMIT: u32 = 40;

/// Catalog endpoint settings used to build request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    endpoint: String,
    api_key: Option<String>,
    max_results: Option<u32>,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CatalogClient {
    /// Creates a client for the given endpoint with no extra parameters.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            max_results: None,
        }
    }

    /// Appends `key=<api_key>` to every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Appends `maxResults=<n>` to every request, clamped to `1..=40`.
    #[must_use]
    pub fn with_max_results(mut self, max_results: Option<u32>) -> Self {
        self.max_results = max_results.map(|n| n.clamp(1, MAX_RESULTS_LIMIT));
        self
    }

    /// Builds the full request URL for `query`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookpilot::catalog::CatalogClient;
    ///
    /// let client = CatalogClient::default();
    /// assert_eq!(
    ///     client.search_url("dune & co"),
    ///     "https://www.googleapis.com/books/v1/volumes?q=dune%20%26%20co"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let mut url = format!("{}?q={}", self.endpoint, urlencoding::encode(query));
        if let Some(max) = self.max_results {
            url.push_str(&format!("&maxResults={max}"));
        }
        if let Some(key) = &self.api_key {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }
        url
    }

    /// Turns a search ticket into a request ready for the host.
    #[must_use]
    pub fn build_request(&self, ticket: &SearchTicket) -> SearchRequest {
        tracing::debug!(request_id = ticket.id, query = %ticket.query, "building catalog request");
        SearchRequest {
            id: ticket.id,
            url: self.search_url(&ticket.query),
        }
    }
}

/// Proof that a search was started: the generation id and the trimmed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: u64,
    pub query: String,
}

/// A GET request the plugin shim should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Generation id of the search that produced this request.
    pub id: u64,
    /// Fully encoded request URL.
    pub url: String,
}

impl SearchRequest {
    /// Returns the context map to attach to the host request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(REQUEST_ID_KEY.to_string(), self.id.to_string())])
    }

    /// Recovers the request id from a response context.
    ///
    /// Returns `None` for responses to requests this plugin did not tag.
    #[must_use]
    pub fn id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(REQUEST_ID_KEY).and_then(|id| id.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_url_encoded() {
        let url = CatalogClient::default().search_url("harry potter/1");
        assert_eq!(url, format!("{DEFAULT_ENDPOINT}?q=harry%20potter%2F1"));
    }

    #[test]
    fn optional_parameters_are_appended() {
        let client = CatalogClient::new("http://localhost/volumes")
            .with_max_results(Some(100))
            .with_api_key(Some("abc".to_string()));
        assert_eq!(
            client.search_url("dune"),
            "http://localhost/volumes?q=dune&maxResults=40&key=abc"
        );
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let client = CatalogClient::default().with_api_key(Some("  ".to_string()));
        assert!(!client.search_url("x").contains("key="));
    }

    #[test]
    fn request_id_survives_context_round_trip() {
        let request = CatalogClient::default().build_request(&SearchTicket {
            id: 7,
            query: "dune".to_string(),
        });
        assert_eq!(SearchRequest::id_from_context(&request.context()), Some(7));
        assert_eq!(SearchRequest::id_from_context(&BTreeMap::new()), None);
    }
}
