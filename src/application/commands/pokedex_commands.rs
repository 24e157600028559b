// src/application/commands/pokedex_commands.rs
//
// Pokedex Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::dto::{PokedexViewDto, PokemonCardDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::services::{PokedexService, SortMode, DEFAULT_PAGE_SIZE};

fn view_dto(pokedex: &PokedexService) -> PokedexViewDto {
    PokedexViewDto {
        cards: pokedex
            .view()
            .into_iter()
            .map(PokemonCardDto::from)
            .collect(),
        exhausted: pokedex.is_exhausted(),
        sort_mode: pokedex.sort_mode().to_string(),
        type_filter: pokedex.type_filter().map(String::from),
    }
}

/// Start a fresh catalog session and stream the first page
pub async fn load_initial_page(state: &AppState) -> Result<PokedexViewDto, String> {
    let mut pokedex = state.pokedex.lock().await;
    pokedex
        .load_initial(DEFAULT_PAGE_SIZE)
        .await
        .to_error_response()?;
    Ok(view_dto(&pokedex))
}

/// The "Load more" button
pub async fn load_more(state: &AppState) -> Result<PokedexViewDto, String> {
    let mut pokedex = state.pokedex.lock().await;
    pokedex
        .load_next(DEFAULT_PAGE_SIZE)
        .await
        .to_error_response()?;
    Ok(view_dto(&pokedex))
}

/// Single-record search by id or name
pub async fn search_pokemon(state: &AppState, term: String) -> Result<PokedexViewDto, String> {
    let mut pokedex = state.pokedex.lock().await;
    pokedex.search(&term).await.to_error_response()?;
    Ok(view_dto(&pokedex))
}

/// Switch the grid comparator
pub async fn set_sort_mode(state: &AppState, label: String) -> Result<PokedexViewDto, String> {
    let mode =
        SortMode::parse(&label).ok_or_else(|| format!("Invalid sort mode: {}", label))?;

    let mut pokedex = state.pokedex.lock().await;
    pokedex.set_sort_mode(mode);
    Ok(view_dto(&pokedex))
}

/// Select a type tag; selecting the active one again clears the filter
pub async fn toggle_type_filter(state: &AppState, tag: String) -> Result<PokedexViewDto, String> {
    let mut pokedex = state.pokedex.lock().await;
    pokedex.toggle_type_filter(&tag);
    Ok(view_dto(&pokedex))
}

pub async fn clear_type_filter(state: &AppState) -> Result<PokedexViewDto, String> {
    let mut pokedex = state.pokedex.lock().await;
    pokedex.set_type_filter(None);
    Ok(view_dto(&pokedex))
}

/// The grid as it should render right now
pub async fn current_view(state: &AppState) -> Result<PokedexViewDto, String> {
    let pokedex = state.pokedex.lock().await;
    Ok(view_dto(&pokedex))
}
