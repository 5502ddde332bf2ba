//! User model and its loan links

use indexmap::IndexMap;
use std::fmt::Write as _;

use super::book::{Book, BookTable};
use super::id::EntityId;

/// A library member.
///
/// Loans are held as non-owning handles: the borrowed book's id maps to the
/// book's name, which resolves against the catalog's book table. A user
/// holds at most one copy of any given book id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub id: EntityId,
    borrowed: IndexMap<EntityId, String>,
}

impl User {
    pub fn new(name: impl Into<String>, id: impl Into<EntityId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            borrowed: IndexMap::new(),
        }
    }

    /// Record a loan of `book`. Recording the same book id twice keeps one link.
    pub fn borrow(&mut self, book: &Book) {
        self.borrowed.insert(book.id.clone(), book.name.clone());
    }

    pub fn has_borrowed(&self, book: &Book) -> bool {
        self.borrowed.contains_key(&book.id)
    }

    /// Whether the loan recorded under `book`'s id is for this very title.
    /// Differs from [`User::has_borrowed`] only when titles share an id.
    pub fn holds(&self, book: &Book) -> bool {
        self.borrowed
            .get(&book.id)
            .is_some_and(|name| *name == book.name)
    }

    /// Name of the title currently recorded under `book`'s id
    pub fn held_under_id(&self, book: &Book) -> Option<&str> {
        self.borrowed.get(&book.id).map(String::as_str)
    }

    /// Drop the loan link for `book`, if any
    pub fn return_book(&mut self, book: &Book) {
        self.borrowed.shift_remove(&book.id);
    }

    /// Names of the books this user holds, in borrow order
    pub fn borrowed_names(&self) -> impl Iterator<Item = &str> {
        self.borrowed.values().map(String::as_str)
    }

    /// Multi-line summary; `detailed` appends every held book's own summary
    pub fn describe(&self, detailed: bool, books: &BookTable) -> String {
        let mut out = format!("User name: {:15} - id: {}", self.name, self.id);
        if detailed && !self.borrowed.is_empty() {
            out.push_str("\n\tBorrowed Books\n");
            for book in self.borrowed_names().filter_map(|name| books.get(name)) {
                let _ = writeln!(out, "\t{}", book);
            }
        }
        out
    }
}
