pub mod client;

pub use client::{
    PokeApiClient, PokemonCatalog, DEFAULT_TOTAL_COUNT, FALLBACK_IMAGE_URL,
};
