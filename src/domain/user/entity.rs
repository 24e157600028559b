use serde::{Deserialize, Serialize};

/// Toy credential record cached in the local store.
/// Serializes to the exact `{email, username, password}` JSON layout the
/// store expects; the password is kept verbatim on purpose, this cache has
/// no security properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserAccount {
    pub fn new(email: String, username: String, password: String) -> Self {
        Self {
            email,
            username,
            password,
        }
    }
}
