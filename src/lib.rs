//! Lendlib Library Catalog Manager
//!
//! Tracks books and their copies, registered users, and the loans between
//! them, and persists the whole catalog as a JSON snapshot between runs.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::{Catalog, LibraryService};
