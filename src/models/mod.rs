//! Data models for Lendlib

pub mod book;
pub mod id;
pub mod snapshot;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookTable};
pub use id::EntityId;
pub use snapshot::{Snapshot, UserRecord};
pub use user::User;
