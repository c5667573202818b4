use std::collections::HashMap;

use serde::Serialize;

use crate::password::{PasswordError, hash_password, verify_password};

/// Plain-text password shared by every seeded account.
const SEED_PASSWORD: &str = "secret";

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
}

/// A stored user record.
#[derive(Debug, Clone)]
pub struct UserInDb {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
    pub hashed_password: String,
}

impl From<&UserInDb> for User {
    fn from(user: &UserInDb) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            disabled: user.disabled,
        }
    }
}

/// Fixed username to user mapping.
pub struct UserStore {
    users: HashMap<String, UserInDb>,
}

impl UserStore {
    /// Build the hard-coded store of `johndoe` (active) and `alice` (disabled).
    pub fn seeded() -> Result<Self, PasswordError> {
        let seeds = [
            ("johndoe", "John Doe", "johndoe@example.com", false),
            ("alice", "Alice Wonderson", "alice@example.com", true),
        ];

        let mut users = HashMap::with_capacity(seeds.len());
        for (username, full_name, email, disabled) in seeds {
            users.insert(
                username.to_string(),
                UserInDb {
                    username: username.to_string(),
                    email: Some(email.to_string()),
                    full_name: Some(full_name.to_string()),
                    disabled,
                    hashed_password: hash_password(SEED_PASSWORD)?,
                },
            );
        }

        Ok(Self { users })
    }

    /// Get a user by username.
    pub fn get(&self, username: &str) -> Option<&UserInDb> {
        self.users.get(username)
    }

    /// Look up a user and check the password. Returns `None` for an unknown
    /// user or a wrong password.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserInDb> {
        let user = self.get(username)?;
        if !verify_password(password, &user.hashed_password) {
            return None;
        }
        Some(user)
    }
}
