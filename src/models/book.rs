//! Book model: a title and its stock of copies

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::EntityId;

/// Books owned by the catalog, keyed by name in insertion order
pub type BookTable = IndexMap<String, Book>;

/// A catalogued book, keyed by name inside the catalog.
///
/// `total_borrowed` never exceeds `total_quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub id: EntityId,
    pub total_quantity: u32,
    #[serde(default)]
    pub total_borrowed: u32,
}

impl Book {
    pub fn new(name: impl Into<String>, id: impl Into<EntityId>, total_quantity: u32) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            total_quantity,
            total_borrowed: 0,
        }
    }

    /// Copies currently on the shelf
    pub fn available(&self) -> u32 {
        self.total_quantity.saturating_sub(self.total_borrowed)
    }

    /// Lend one copy. Returns `false` when no copy is left.
    pub fn borrow(&mut self) -> bool {
        if self.available() == 0 {
            return false;
        }
        self.total_borrowed += 1;
        true
    }

    /// Take one copy back.
    ///
    /// # Panics
    ///
    /// Panics if no copy is lent out; the catalog only calls this for a
    /// recorded loan.
    pub fn return_copy(&mut self) {
        assert!(
            self.total_borrowed > 0,
            "book '{}' returned with no copy lent out",
            self.name
        );
        self.total_borrowed -= 1;
    }

    /// Add copies to the stock
    pub fn restock(&mut self, quantity: u32) {
        self.total_quantity = self.total_quantity.saturating_add(quantity);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book name: {:20} - id: {} - total quantity: {} - total borrowed: {}",
            self.name, self.id, self.total_quantity, self.total_borrowed
        )
    }
}
