//! In-memory stores backing the demo applications.
//!
//! Nothing here is persisted: both stores live for the lifetime of the process.

mod items;
mod user;

use std::sync::Arc;

use crate::password::PasswordError;

pub use items::{CATALOGUE, CatalogueEntry, Item, ItemStore};
pub use user::{User, UserInDb, UserStore};

#[derive(Clone)]
pub struct Database {
    users: Arc<UserStore>,
    items: ItemStore,
}

impl Database {
    /// Build the stores, hashing the seeded users' passwords.
    pub fn seeded() -> Result<Self, PasswordError> {
        Ok(Self {
            users: Arc::new(UserStore::seeded()?),
            items: ItemStore::new(),
        })
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }
}
