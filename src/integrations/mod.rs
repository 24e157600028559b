// src/integrations/mod.rs
//
// External integrations - infrastructure clients for remote services

pub mod pokeapi;

pub use pokeapi::{PokeApiClient, PokemonCatalog, DEFAULT_TOTAL_COUNT, FALLBACK_IMAGE_URL};
