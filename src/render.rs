//! Text rendering of catalog results for the command line

use crate::{
    error::AppError,
    models::{Book, BookTable, User},
    services::{AddBookOutcome, BorrowOutcome, ReturnOutcome},
};

pub fn books(books: &[&Book]) -> String {
    if books.is_empty() {
        return "No matching books.".to_string();
    }
    books
        .iter()
        .map(|book| book.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every user with the books they hold
pub fn users<'a>(users: impl Iterator<Item = &'a User>, books: &BookTable) -> String {
    let mut lines = vec!["--- Library Users ---".to_string()];
    lines.extend(users.map(|user| user.describe(true, books)));
    lines.join("\n")
}

pub fn borrowers(book_name: &str, users: &[&User], books: &BookTable) -> String {
    if !books.contains_key(book_name) {
        return "Invalid book name!".to_string();
    }
    if users.is_empty() {
        return "No one borrowed this book!".to_string();
    }
    let mut lines = vec!["List of users borrowed this book:".to_string()];
    lines.extend(users.iter().map(|user| user.describe(false, books)));
    lines.join("\n")
}

pub fn add_book(name: &str, outcome: AddBookOutcome) -> String {
    match outcome {
        AddBookOutcome::Created => format!("Book '{}' added.", name),
        AddBookOutcome::Restocked { total_quantity } => format!(
            "Book '{}' already exists, quantity updated to {}.",
            name, total_quantity
        ),
    }
}

pub fn add_user(name: &str, created: bool) -> String {
    if created {
        format!("User '{}' added.", name)
    } else {
        format!("User '{}' already exists.", name)
    }
}

pub fn borrow(user_name: &str, book_name: &str, outcome: BorrowOutcome) -> String {
    match outcome {
        BorrowOutcome::Borrowed => format!("'{}' borrowed '{}'.", user_name, book_name),
        BorrowOutcome::AlreadyHeld => {
            format!("'{}' already has a copy of '{}'.", user_name, book_name)
        }
    }
}

pub fn return_book(user_name: &str, book_name: &str, outcome: ReturnOutcome) -> String {
    match outcome {
        ReturnOutcome::Returned => format!("'{}' returned '{}'.", user_name, book_name),
        ReturnOutcome::NotBorrowed => "This user did not borrow this book".to_string(),
        ReturnOutcome::UnknownUser => "Invalid user name!".to_string(),
        ReturnOutcome::UnknownBook => "Invalid book name!".to_string(),
    }
}

pub fn error(error: &AppError) -> String {
    if error.is_lending() {
        format!("Failed to borrow book: {}", error)
    } else {
        format!("Error: {}", error)
    }
}
