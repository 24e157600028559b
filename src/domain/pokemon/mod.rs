pub mod entity;
pub mod invariants;

pub use entity::{Pokemon, PokemonDetail, StatValue};
pub use invariants::validate_pokemon;
