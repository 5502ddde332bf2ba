//! User registration and lookup

use crate::models::{EntityId, User};

use super::catalog::Catalog;

impl Catalog {
    /// Register a user. Returns `false`, leaving the existing user untouched,
    /// when the name is taken.
    pub fn add_user(&mut self, name: &str, id: impl Into<EntityId>) -> bool {
        if self.users.contains_key(name) {
            tracing::info!("User '{}' already exists", name);
            return false;
        }
        self.users.insert(name.to_string(), User::new(name, id));
        true
    }

    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// Every user in registration order
    pub fn all_users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}
