// src/services/auth_service.rs
//
// Toy account flow over the local store. Mirrors the browser layout exactly:
// the "loggedUser" key holds the session username, and each username key
// holds a JSON credential record. Passwords are compared and stored verbatim;
// this cache has no security properties.

use std::sync::Arc;

use crate::domain::{validate_user_account, UserAccount};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, UserLoggedIn, UserLoggedOut, UserRegistered};
use crate::repositories::LocalStore;
use serde::{Deserialize, Serialize};

/// Session marker key
pub const LOGGED_USER_KEY: &str = "loggedUser";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub struct AuthService {
    store: Arc<dyn LocalStore>,
    event_bus: Arc<EventBus>,
}

impl AuthService {
    pub fn new(store: Arc<dyn LocalStore>, event_bus: Arc<EventBus>) -> Self {
        Self { store, event_bus }
    }

    /// Create a credential record. Does not start a session.
    pub fn register(&self, request: RegisterRequest) -> AppResult<()> {
        let account = UserAccount::new(
            request.email.trim().to_string(),
            request.username.trim().to_string(),
            request.password.trim().to_string(),
        );

        validate_user_account(&account).map_err(AppError::Domain)?;

        if self.store.get(&account.username)?.is_some() {
            return Err(AppError::Validation("User already exists".to_string()));
        }

        let encoded = serde_json::to_string(&account)?;
        self.store.set(&account.username, &encoded)?;

        self.event_bus
            .emit(UserRegistered::new(account.username.clone()));

        Ok(())
    }

    /// Check credentials and set the session marker
    pub fn login(&self, request: LoginRequest) -> AppResult<UserAccount> {
        let username = request.username.trim();

        let stored = self.store.get(username)?.ok_or(AppError::NotFound)?;
        let account: UserAccount = serde_json::from_str(&stored)?;

        if account.password != request.password.trim() {
            return Err(AppError::Validation("Wrong password".to_string()));
        }

        self.store.set(LOGGED_USER_KEY, username)?;
        self.event_bus.emit(UserLoggedIn::new(username.to_string()));

        Ok(account)
    }

    /// Clear the session marker. Idempotent.
    pub fn logout(&self) -> AppResult<()> {
        self.store.remove(LOGGED_USER_KEY)?;
        self.event_bus.emit(UserLoggedOut::new());
        Ok(())
    }

    /// Resolve the session marker to its account record.
    /// A marker pointing at a deleted record yields None.
    pub fn current_user(&self) -> AppResult<Option<UserAccount>> {
        let username = match self.store.get(LOGGED_USER_KEY)? {
            Some(username) => username,
            None => return Ok(None),
        };

        match self.store.get(&username)? {
            Some(stored) => Ok(Some(serde_json::from_str(&stored)?)),
            None => Ok(None),
        }
    }
}
