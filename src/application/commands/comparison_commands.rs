// src/application/commands/comparison_commands.rs
//
// Comparator Command Handlers

use crate::application::dto::PokemonProfileDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

fn slot_dtos(slots: Vec<crate::domain::PokemonDetail>) -> Vec<PokemonProfileDto> {
    slots.into_iter().map(PokemonProfileDto::from).collect()
}

/// The persisted two-slot selection
pub async fn get_comparison(state: &AppState) -> Result<Vec<PokemonProfileDto>, String> {
    let slots = state.comparison_service.selection().to_error_response()?;
    Ok(slot_dtos(slots))
}

/// Fetch a record by name into the first free slot
pub async fn add_to_comparison(
    state: &AppState,
    name: String,
) -> Result<Vec<PokemonProfileDto>, String> {
    let slots = state
        .comparison_service
        .add(&name)
        .await
        .to_error_response()?;
    Ok(slot_dtos(slots))
}

/// Free a slot by position
pub async fn remove_from_comparison(
    state: &AppState,
    index: usize,
) -> Result<Vec<PokemonProfileDto>, String> {
    let slots = state.comparison_service.remove(index).to_error_response()?;
    Ok(slot_dtos(slots))
}
