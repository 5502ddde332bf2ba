//! Catalog coordinator: owns every book and user

use indexmap::IndexMap;

use crate::models::{Book, BookTable, EntityId, User};

/// Result of adding a book by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddBookOutcome {
    /// A new title was catalogued
    Created,
    /// The title existed; its quantity grew and its id was kept
    Restocked { total_quantity: u32 },
}

/// In-memory catalog of books and users, both keyed by name.
///
/// Users refer to books by handle only; the catalog is the sole owner.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) books: BookTable,
    pub(crate) users: IndexMap<String, User>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` copies of `name`, creating the title if unknown
    pub fn add_book(
        &mut self,
        name: &str,
        id: impl Into<EntityId>,
        quantity: u32,
    ) -> AddBookOutcome {
        if let Some(book) = self.books.get_mut(name) {
            tracing::info!("Book '{}' already exists, updating quantity", name);
            book.restock(quantity);
            return AddBookOutcome::Restocked {
                total_quantity: book.total_quantity,
            };
        }

        let book = Book::new(name, id, quantity);
        if let Some(other) = self.books.values().find(|b| b.id == book.id) {
            tracing::warn!(
                "Book '{}' reuses id {} already held by '{}'",
                name,
                book.id,
                other.name
            );
        }
        tracing::debug!("Catalogued book '{}' with {} copies", name, quantity);
        self.books.insert(name.to_string(), book);
        AddBookOutcome::Created
    }

    /// Books whose name starts with `prefix`, in catalog order.
    /// An empty prefix lists the whole catalog.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, book)| book)
            .collect()
    }

    pub fn get_book(&self, name: &str) -> Option<&Book> {
        self.books.get(name)
    }

    pub fn all_books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn book_table(&self) -> &BookTable {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.users.is_empty()
    }

    /// Populate with the sample library used for demonstrations
    pub fn seed_demo_data(&mut self) {
        const BOOKS: [(&str, &str, u32); 6] = [
            ("math4", "100", 3),
            ("math2", "101", 5),
            ("math1", "102", 4),
            ("math3", "103", 2),
            ("prog1", "201", 3),
            ("prog2", "202", 3),
        ];
        const USERS: [(&str, &str); 4] = [
            ("mostafa", "30301"),
            ("ali", "50501"),
            ("noha", "70701"),
            ("ashraf", "90901"),
        ];
        const LOANS: [(&str, &str); 2] = [("mostafa", "math3"), ("noha", "math3")];

        for (name, id, quantity) in BOOKS {
            self.add_book(name, id, quantity);
        }
        for (name, id) in USERS {
            self.add_user(name, id);
        }
        for (user, book) in LOANS {
            if let Err(e) = self.borrow_book(user, book) {
                tracing::warn!("Skipping demo loan {} -> {}: {}", user, book, e);
            }
        }
    }
}
