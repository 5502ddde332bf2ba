//! Catalog integration tests: lending flows and persistence through a JSON file

use lendlib::{
    error::AppError,
    repository::{JsonFileStore, Repository},
    services::{BorrowOutcome, ReturnOutcome},
    Catalog, LibraryService,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

fn library_at(dir: &TempDir) -> LibraryService {
    let store = JsonFileStore::new(dir.path().join("Library_data.json"), true);
    LibraryService::new(Repository::new(store))
}

fn borrower_names(catalog: &Catalog, book: &str) -> Vec<String> {
    catalog
        .borrowers_of(book)
        .into_iter()
        .map(|u| u.name.clone())
        .collect()
}

#[test]
fn test_lending_scenario() {
    let mut catalog = Catalog::new();
    catalog.add_book("math3", 103, 2);
    for (name, id) in [("mostafa", 30301), ("noha", 70701), ("ali", 50501)] {
        assert!(catalog.add_user(name, id));
    }

    assert_eq!(catalog.borrow_book("mostafa", "math3").unwrap(), BorrowOutcome::Borrowed);
    assert_eq!(catalog.get_book("math3").unwrap().total_borrowed, 1);
    assert_eq!(catalog.borrow_book("noha", "math3").unwrap(), BorrowOutcome::Borrowed);
    assert_eq!(catalog.get_book("math3").unwrap().total_borrowed, 2);

    let err = catalog.borrow_book("ali", "math3").unwrap_err();
    assert!(matches!(err, AppError::OutOfStock(_)));
    assert_eq!(catalog.get_book("math3").unwrap().total_borrowed, 2);

    assert_eq!(catalog.return_book("mostafa", "math3"), ReturnOutcome::Returned);
    assert_eq!(catalog.get_book("math3").unwrap().total_borrowed, 1);
    assert_eq!(borrower_names(&catalog, "math3"), ["noha"]);
}

#[test]
fn test_first_run_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = library_at(&dir);

    assert!(!library.load().unwrap());
    assert!(library.catalog.is_empty());
}

#[test]
fn test_save_then_load_reproduces_catalog() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = library_at(&dir);
    first.catalog.seed_demo_data();
    first.catalog.add_book("math3", 103, 1);
    first.catalog.borrow_book("ali", "math3").unwrap();
    first.catalog.borrow_book("ali", "prog1").unwrap();
    first.save().unwrap();

    let mut second = library_at(&dir);
    assert!(second.load().unwrap());

    assert_eq!(second.catalog.to_snapshot(), first.catalog.to_snapshot());
    assert_eq!(second.catalog.get_book("math3").unwrap().total_quantity, 3);
    assert_eq!(borrower_names(&second.catalog, "math3"), ["mostafa", "ali", "noha"]);

    // Relinked loans behave like the originals
    assert_eq!(second.catalog.return_book("noha", "math3"), ReturnOutcome::Returned);
    assert_eq!(second.catalog.get_book("math3").unwrap().total_borrowed, 2);
}

#[test]
fn test_snapshot_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = library_at(&dir);
    library.catalog.add_book("prog1", "201", 3);
    library.catalog.add_user("noha", "70701");
    library.catalog.borrow_book("noha", "prog1").unwrap();
    library.save().unwrap();

    let text = std::fs::read_to_string(dir.path().join("Library_data.json")).unwrap();
    let body: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        body,
        json!({
            "books": [
                {"name": "prog1", "id": "201", "total_quantity": 3, "total_borrowed": 1}
            ],
            "users": [
                {"name": "noha", "id": "70701", "borrowed_books": ["prog1"]}
            ]
        })
    );
}

#[test]
fn test_loads_foreign_snapshot_leniently() {
    let dir = tempfile::tempdir().unwrap();
    let document = json!({
        "books": [
            {"name": "math1", "id": 102, "total_quantity": 4, "total_borrowed": 1, "note": "extra"}
        ],
        "users": [
            {"name": "ashraf", "id": 90901, "borrowed_books": ["math1", "withdrawn"]},
            {"name": "ali", "id": 50501}
        ],
        "version": 1
    });
    std::fs::write(dir.path().join("Library_data.json"), document.to_string()).unwrap();

    let mut library = library_at(&dir);
    library.load().unwrap();

    let ashraf = library.catalog.get_user("ashraf").unwrap();
    assert_eq!(ashraf.borrowed_names().collect::<Vec<_>>(), ["math1"]);
    assert_eq!(library.catalog.get_user("ali").unwrap().borrowed_names().count(), 0);
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Library_data.json"), "{\"books\": 3}").unwrap();

    let result = library_at(&dir).load();
    assert!(matches!(result, Err(AppError::Snapshot(_))));
}
