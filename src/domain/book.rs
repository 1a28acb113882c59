//! Book domain model.
//!
//! A [`BookItem`] is one catalog entry as returned by the search API. Items are
//! immutable once fetched; the favorites store and the results list hold their
//! own clones.

/// Placeholder used wherever a book has no author information.
pub const UNKNOWN_AUTHORS: &str = "Unknown author(s)";

/// Maximum number of description characters shown before truncation.
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Catalog identifier, unique per entry
/// - `title`: Display title
/// - `authors`: Ordered author names, `None` when the catalog omits them
/// - `description`: Optional free-text blurb
/// - `thumbnail`: Optional cover image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItem {
    pub id: String,
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl BookItem {
    /// Creates a book with only an identifier and a title.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookpilot::domain::BookItem;
    ///
    /// let book = BookItem::new("1", "Dune").with_authors(["Frank Herbert"]);
    /// assert_eq!(book.author_line(), "Frank Herbert");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: None,
            description: None,
            thumbnail: None,
        }
    }

    /// Sets the author list.
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the authors joined by `", "`, or [`UNKNOWN_AUTHORS`].
    ///
    /// An empty author list counts as unknown.
    #[must_use]
    pub fn author_line(&self) -> String {
        match self.authors.as_deref() {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => UNKNOWN_AUTHORS.to_string(),
        }
    }

    /// Returns the first 200 characters of the description followed by `...`.
    ///
    /// Returns `None` when the book has no description. Truncation is
    /// character-based so multi-byte text is never split.
    #[must_use]
    pub fn description_preview(&self) -> Option<String> {
        self.description.as_ref().map(|text| {
            let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{preview}...")
        })
    }
}
