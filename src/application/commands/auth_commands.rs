// src/application/commands/auth_commands.rs
//
// Account Command Handlers (toy login flow)

use crate::application::dto::{LoginDto, RegisterDto, UserDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::services::{LoginRequest, RegisterRequest};

/// Create a credential record; the user still has to log in afterwards
pub async fn register_user(state: &AppState, dto: RegisterDto) -> Result<(), String> {
    let request = RegisterRequest {
        email: dto.email,
        username: dto.username,
        password: dto.password,
    };

    state.auth_service.register(request).to_error_response()
}

/// Check credentials and start a session
pub async fn login_user(state: &AppState, dto: LoginDto) -> Result<UserDto, String> {
    let request = LoginRequest {
        username: dto.username,
        password: dto.password,
    };

    let account = state.auth_service.login(request).to_error_response()?;
    Ok(UserDto::from(account))
}

/// End the session. Safe to call when nobody is logged in.
pub async fn logout_user(state: &AppState) -> Result<(), String> {
    state.auth_service.logout().to_error_response()
}

/// Whoever the session marker points at, if anyone
pub async fn current_user(state: &AppState) -> Result<Option<UserDto>, String> {
    let account = state.auth_service.current_user().to_error_response()?;
    Ok(account.map(UserDto::from))
}
