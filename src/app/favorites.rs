//! In-memory favorites store.
//!
//! Favorites are kept in insertion order and keyed by book id. The store is
//! independent of the search results: toggling a favorite never touches the
//! results list, and a new search never touches the favorites.

use crate::domain::BookItem;

/// Ordered set of favorited books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    items: Vec<BookItem>,
}

impl Favorites {
    /// Adds `book` if no favorite shares its id, otherwise removes that favorite.
    ///
    /// Returns `true` if the book is a favorite after the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookpilot::app::Favorites;
    /// use bookpilot::domain::BookItem;
    ///
    /// let mut favorites = Favorites::default();
    /// let dune = BookItem::new("1", "Dune");
    /// assert!(favorites.toggle(&dune));
    /// assert!(!favorites.toggle(&dune));
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, book: &BookItem) -> bool {
        if let Some(index) = self.items.iter().position(|f| f.id == book.id) {
            self.items.remove(index);
            tracing::debug!(book_id = %book.id, "removed favorite");
            false
        } else {
            self.items.push(book.clone());
            tracing::debug!(book_id = %book.id, "added favorite");
            true
        }
    }

    #[must_use]
    pub fn contains(&self, book_id: &str) -> bool {
        self.items.iter().any(|f| f.id == book_id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BookItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original() {
        let mut favorites = Favorites::default();
        favorites.toggle(&BookItem::new("a", "A"));
        let before = favorites.clone();

        let b = BookItem::new("b", "B");
        favorites.toggle(&b);
        favorites.toggle(&b);
        assert_eq!(favorites, before);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut favorites = Favorites::default();
        for id in ["c", "a", "b"] {
            favorites.toggle(&BookItem::new(id, id.to_uppercase()));
        }
        favorites.toggle(&BookItem::new("a", "A"));
        let ids: Vec<&str> = favorites.as_slice().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["c", "b"]);
    }

    #[test]
    fn membership_is_keyed_by_id() {
        let mut favorites = Favorites::default();
        favorites.toggle(&BookItem::new("1", "Dune"));
        // same id, different payload: removes rather than duplicates
        assert!(!favorites.toggle(&BookItem::new("1", "Dune (Deluxe Edition)")));
        assert!(!favorites.contains("1"));
        assert_eq!(favorites.len(), 0);
    }
}
