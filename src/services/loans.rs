//! Loan management: borrowing, returning, and who holds what

use crate::{
    error::{AppError, AppResult},
    models::User,
};

use super::catalog::Catalog;

/// Successful result of a borrow request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// A copy was lent and linked to the user
    Borrowed,
    /// The user already holds this book; stock was not touched
    AlreadyHeld,
}

/// Result of a return request. Returning never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    /// Both names are known but no loan links them
    NotBorrowed,
    UnknownUser,
    UnknownBook,
}

impl Catalog {
    /// Lend one copy of `book_name` to `user_name`.
    ///
    /// The user is looked up before the book, so an unknown user is reported
    /// even when the book is unknown too.
    pub fn borrow_book(&mut self, user_name: &str, book_name: &str) -> AppResult<BorrowOutcome> {
        let user = self
            .users
            .get_mut(user_name)
            .ok_or_else(|| AppError::UserNotFound(user_name.to_string()))?;
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| AppError::BookNotFound(book_name.to_string()))?;

        if user.holds(book) {
            tracing::debug!("User '{}' already holds '{}'", user_name, book_name);
            return Ok(BorrowOutcome::AlreadyHeld);
        }

        if !book.borrow() {
            return Err(AppError::OutOfStock(book_name.to_string()));
        }
        if let Some(displaced) = user.held_under_id(book) {
            tracing::warn!(
                "Loan of '{}' to '{}' replaces the link to '{}', which shares id {}",
                book_name,
                user_name,
                displaced,
                book.id
            );
        }
        user.borrow(book);

        tracing::debug!(
            "Lent '{}' to '{}' ({}/{} out)",
            book_name,
            user_name,
            book.total_borrowed,
            book.total_quantity
        );
        Ok(BorrowOutcome::Borrowed)
    }

    /// Take back `book_name` from `user_name`.
    ///
    /// Unknown names are a silent no-op; a missing loan logs a diagnostic.
    pub fn return_book(&mut self, user_name: &str, book_name: &str) -> ReturnOutcome {
        let Some(user) = self.users.get_mut(user_name) else {
            return ReturnOutcome::UnknownUser;
        };
        let Some(book) = self.books.get_mut(book_name) else {
            return ReturnOutcome::UnknownBook;
        };

        if !user.holds(book) {
            tracing::warn!("User '{}' did not borrow '{}'", user_name, book_name);
            return ReturnOutcome::NotBorrowed;
        }

        user.return_book(book);
        book.return_copy();
        ReturnOutcome::Returned
    }

    /// Users currently holding `book_name`; empty for an unknown book
    pub fn borrowers_of(&self, book_name: &str) -> Vec<&User> {
        let Some(book) = self.books.get(book_name) else {
            return Vec::new();
        };
        self.users.values().filter(|u| u.holds(book)).collect()
    }
}
