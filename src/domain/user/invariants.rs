use super::entity::UserAccount;
use crate::domain::{DomainError, DomainResult};

/// Validates a credential record before it enters the local store
pub fn validate_user_account(account: &UserAccount) -> DomainResult<()> {
    if !account.email.contains('@') {
        return Err(DomainError::InvariantViolation(
            "Email must contain an @".to_string(),
        ));
    }
    if account.username.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Username cannot be empty".to_string(),
        ));
    }
    if account.password.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}
