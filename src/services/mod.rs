// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod comparison_service;
pub mod pokedex_service;
pub mod profile_service;

#[cfg(test)]
mod pokedex_service_tests;

// Re-export all services and their types
pub use pokedex_service::{
    project,
    LoadPhase,
    PaginationCursor,
    PokedexService,
    SortMode,
    BATCH_WINDOW,
    DEFAULT_PAGE_SIZE,
};

pub use profile_service::ProfileService;

pub use comparison_service::{
    ComparisonService,
    COMPARED_POKEMONS_KEY,
    MAX_COMPARISON_SLOTS,
};

pub use auth_service::{
    AuthService,
    LoginRequest,
    RegisterRequest,
    LOGGED_USER_KEY,
};
