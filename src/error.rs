//! Error types for Lendlib

use thiserror::Error;

/// Numeric error codes, used by the command line front end as exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
}

impl ErrorCode {
    /// Process exit status for this code
    pub fn exit_status(self) -> u8 {
        self as u8
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("User {0} is not found")]
    UserNotFound(String),

    #[error("Book {0} is not found")]
    BookNotFound(String),

    #[error("'{0}' is currently out of stock")]
    OutOfStock(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::OutOfStock(_) => ErrorCode::ItemNotAvailable,
            AppError::Io(_) | AppError::Snapshot(_) | AppError::Config(_) => ErrorCode::Failure,
        }
    }

    /// Whether the error comes from a catalog lookup or stock check,
    /// as opposed to persistence or configuration
    pub fn is_lending(&self) -> bool {
        matches!(
            self,
            AppError::UserNotFound(_) | AppError::BookNotFound(_) | AppError::OutOfStock(_)
        )
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
