//! Catalog response decoding.
//!
//! The search API returns loosely structured JSON. It is decoded into
//! explicit optional-field types and then flattened into [`BookItem`]s. A body
//! that is not a volumes response becomes [`CatalogError::Decode`]; a single
//! malformed volume is skipped so the rest of the page still shows.

use crate::domain::{BookItem, CatalogError};
use serde::Deserialize;

/// Number of body bytes kept in [`CatalogError::Status`] for diagnostics.
const ERROR_DETAIL_BYTES: usize = 256;

/// Top-level search response. `items` is absent when nothing matched.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    id: String,
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: String,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    #[serde(default)]
    thumbnail: Option<String>,
}

impl From<VolumeItem> for BookItem {
    fn from(item: VolumeItem) -> Self {
        let info = item.volume_info;
        Self {
            id: item.id,
            title: info.title,
            authors: info.authors,
            description: info.description,
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
        }
    }
}

/// Result of one catalog round-trip, as seen by the search controller.
#[derive(Debug)]
pub enum SearchOutcome {
    /// At least one book matched, in API response order.
    Found(Vec<BookItem>),
    /// The request succeeded but returned no items.
    Empty,
    /// Transport, status, or decoding failure.
    Failed(CatalogError),
}

/// Interprets a host response (status + raw body) as a search outcome.
///
/// # Examples
///
/// ```
/// use bookpilot::catalog::{decode_response, SearchOutcome};
///
/// let body = br#"{"items":[{"id":"1","volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#;
/// match decode_response(200, body) {
///     SearchOutcome::Found(books) => assert_eq!(books[0].title, "Dune"),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[must_use]
pub fn decode_response(status: u16, body: &[u8]) -> SearchOutcome {
    if !(200..300).contains(&status) {
        let cut = body.len().min(ERROR_DETAIL_BYTES);
        return SearchOutcome::Failed(CatalogError::Status {
            status,
            detail: String::from_utf8_lossy(&body[..cut]).into_owned(),
        });
    }

    match serde_json::from_slice::<VolumesResponse>(body) {
        Ok(response) => {
            let books: Vec<BookItem> = response
                .items
                .unwrap_or_default()
                .into_iter()
                .filter_map(|raw| match serde_json::from_value::<VolumeItem>(raw) {
                    Ok(item) => Some(BookItem::from(item)),
                    Err(e) => {
                        tracing::debug!(error = %e, "skipping malformed volume");
                        None
                    }
                })
                .collect();
            tracing::debug!(count = books.len(), "decoded catalog response");
            if books.is_empty() {
                SearchOutcome::Empty
            } else {
                SearchOutcome::Found(books)
            }
        }
        Err(e) => SearchOutcome::Failed(CatalogError::Decode(e)),
    }
}
