//! Snapshot wire records
//!
//! The on-disk document has two top-level arrays, `books` and `users`.
//! Users carry the names of the books they hold instead of the books
//! themselves. Unknown fields are ignored on read.

use serde::{Deserialize, Serialize};

use super::book::Book;
use super::id::EntityId;

/// Persisted catalog state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Persisted user: loans flattened to book names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub id: EntityId,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reads_documents_written_by_earlier_versions() {
        let document = json!({
            "books": [
                {
                    "name": "math3",
                    "id": "103",
                    "total_quantity": 2,
                    "total_borrowed": 1,
                    "shelf": "A"
                }
            ],
            "users": [
                {"name": "mostafa", "id": "30301", "borrowed_books": ["math3"]},
                {"name": "ali", "id": "50501"}
            ]
        });

        let snapshot: Snapshot = serde_json::from_value(document).unwrap();

        assert_eq!(snapshot.books[0].total_borrowed, 1);
        assert_eq!(snapshot.books[0].id, EntityId::from("103"));
        assert_eq!(snapshot.users[0].borrowed_books, vec!["math3".to_string()]);
        assert!(snapshot.users[1].borrowed_books.is_empty());
    }

    #[test]
    fn writes_exact_field_names() {
        let snapshot = Snapshot {
            books: vec![Book::new("prog1", 201, 3)],
            users: vec![UserRecord {
                name: "noha".into(),
                id: EntityId::from(70701),
                borrowed_books: vec!["prog1".into()],
            }],
        };

        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({
                "books": [
                    {"name": "prog1", "id": 201, "total_quantity": 3, "total_borrowed": 0}
                ],
                "users": [
                    {"name": "noha", "id": 70701, "borrowed_books": ["prog1"]}
                ]
            })
        );
    }
}
