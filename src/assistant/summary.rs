//! Plain-text summary of the session for the assistant.

use crate::domain::BookItem;

const NO_RESULTS_PLACEHOLDER: &str = "No current search results.";
const NO_FAVORITES_PLACEHOLDER: &str = "Favorites list is empty.";

/// Formats one book as `• "<title>" by <authors>`.
#[must_use]
pub fn describe(book: &BookItem) -> String {
    format!("• \"{}\" by {}", book.title, book.author_line())
}

fn describe_all(books: &[BookItem]) -> String {
    books.iter().map(describe).collect::<Vec<_>>().join("\n")
}

/// Summarizes the current results and favorites.
///
/// Deterministic for the same inputs. Each section follows its collection's
/// iteration order; an empty collection yields its placeholder line.
///
/// # Examples
///
/// ```
/// use bookpilot::assistant::summarize;
/// use bookpilot::domain::BookItem;
///
/// let results = vec![BookItem::new("1", "Dune").with_authors(["Frank Herbert"])];
/// let summary = summarize(&results, &[]);
/// assert!(summary.contains("• \"Dune\" by Frank Herbert"));
/// assert!(summary.contains("Favorites list is empty."));
/// ```
#[must_use]
pub fn summarize(results: &[BookItem], favorites: &[BookItem]) -> String {
    let mut summary = String::new();

    if results.is_empty() {
        summary.push_str(&format!("\n{NO_RESULTS_PLACEHOLDER}\n"));
    } else {
        summary.push_str("\nCurrent search results:\n");
        summary.push_str(&describe_all(results));
    }

    if favorites.is_empty() {
        summary.push_str(&format!("\n\n{NO_FAVORITES_PLACEHOLDER}\n"));
    } else {
        summary.push_str("\n\nUser's favorites:\n");
        summary.push_str(&describe_all(favorites));
    }

    summary
}
