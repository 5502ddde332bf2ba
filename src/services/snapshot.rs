//! Snapshot codec: flattening the catalog for storage and relinking it on load

use indexmap::IndexMap;

use crate::models::{Book, BookTable, Snapshot, User, UserRecord};

use super::catalog::Catalog;

impl Catalog {
    /// Flatten into a snapshot; loans become lists of book names
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            books: self.books.values().cloned().collect(),
            users: self
                .users
                .values()
                .map(|user| UserRecord {
                    name: user.name.clone(),
                    id: user.id.clone(),
                    borrowed_books: user.borrowed_names().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a catalog. Books are restored first so loan links can be
    /// resolved by name; links to names absent from the book table are dropped.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let books: BookTable = snapshot
            .books
            .into_iter()
            .inspect(check_counts)
            .map(|book| (book.name.clone(), book))
            .collect();

        let mut users = IndexMap::with_capacity(snapshot.users.len());
        for record in snapshot.users {
            let mut user = User::new(record.name, record.id);
            for name in &record.borrowed_books {
                match books.get(name) {
                    Some(book) => user.borrow(book),
                    None => tracing::warn!(
                        "Dropping loan of unknown book '{}' held by '{}'",
                        name,
                        user.name
                    ),
                }
            }
            users.insert(user.name.clone(), user);
        }

        Self { books, users }
    }
}

fn check_counts(book: &Book) {
    if book.total_borrowed > book.total_quantity {
        tracing::warn!(
            "Book '{}' records {} copies borrowed out of {}",
            book.name,
            book.total_borrowed,
            book.total_quantity
        );
    }
}
