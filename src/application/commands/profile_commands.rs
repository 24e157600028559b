// src/application/commands/profile_commands.rs
//
// Detail Page Command Handlers

use crate::application::dto::PokemonProfileDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

/// Full record for the detail page, by id or name
pub async fn get_pokemon_profile(
    state: &AppState,
    identifier: String,
) -> Result<PokemonProfileDto, String> {
    let detail = state
        .profile_service
        .profile(&identifier)
        .await
        .to_error_response()?;

    Ok(PokemonProfileDto::from(detail))
}
